mod api;
mod model;
mod wire;

pub use api::NEW_TITLES_QUERY;
pub use model::{NewTitle, Offer, ReleaseYearRange, TitleFilter};

use chrono::{NaiveDate, Utc};

use crate::{JwClient, JwError};

/// A builder for collecting the new-release timeline of a country.
///
/// The fetch scans backward from the reference date one calendar day at a
/// time, issuing one query per day and appending every returned edge, until
/// either the day window is exhausted or enough titles have been collected.
pub struct NewTitlesBuilder {
    client: JwClient,
    country: String,
    language: String,
    date: NaiveDate,
    max_days: u32,
    max_count: usize,
    filter: TitleFilter,
}

impl NewTitlesBuilder {
    /// Creates a new `NewTitlesBuilder` for a given country code (e.g., "us").
    pub fn new(client: &JwClient, country: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            country: country.into(),
            language: "en".to_string(),
            date: Utc::now().date_naive(),
            max_days: 7,
            max_count: 100,
            filter: TitleFilter::default(),
        }
    }

    /// Sets the content language. Default: `"en"`.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the reference date the scan starts from. Default: today (UTC).
    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets how many days to scan backward from the reference date. Default: 7.
    #[must_use]
    pub const fn max_days(mut self, days: u32) -> Self {
        self.max_days = days;
        self
    }

    /// Stops scanning further days once more than this many titles have been
    /// collected. Default: 100.
    ///
    /// The bound is a loop guard, not a cap: the last day scanned is appended
    /// wholesale, so the result may exceed `count`. Truncate the returned
    /// vector if an exact bound is required.
    #[must_use]
    pub const fn max_count(mut self, count: usize) -> Self {
        self.max_count = count;
        self
    }

    /// Replaces the title filter sent with every day's query.
    #[must_use]
    pub fn filter(mut self, filter: TitleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Restricts the filter to one provider package short name
    /// (see [`ProvidersBuilder`](crate::providers::ProvidersBuilder) for
    /// resolving a human-readable name to its short name).
    #[must_use]
    pub fn package(mut self, short_name: impl Into<String>) -> Self {
        self.filter.packages.push(short_name.into());
        self
    }

    /// Executes the day-window scan and collects the new titles.
    ///
    /// # Errors
    ///
    /// Returns a `JwError` as soon as any day's query fails; no partial
    /// result is returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(country = %self.country, date = %self.date)))]
    pub async fn fetch(self) -> Result<Vec<NewTitle>, JwError> {
        api::fetch_new_titles(
            &self.client,
            &self.country,
            &self.language,
            self.date,
            self.max_days,
            self.max_count,
            &self.filter,
        )
        .await
    }
}
