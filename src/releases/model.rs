use serde::Serialize;

use crate::providers::Provider;

/// Filter payload applied to every day's query.
///
/// The filter is passed through verbatim as the `filter` variable; the
/// defaults match what the JustWatch site itself requests for the "new" page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleFilter {
    /// Object types to include (e.g., "MOVIE", "SHOW_SEASON").
    pub object_types: Vec<String>,
    /// Provider package short names to restrict to; empty means every provider.
    pub packages: Vec<String>,
    /// Monetization types to include (e.g., "FLATRATE", "RENT").
    pub monetization_types: Vec<String>,
    /// Inclusive release-year floor; `None` places no bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<ReleaseYearRange>,
}

impl Default for TitleFilter {
    fn default() -> Self {
        Self {
            object_types: vec!["MOVIE".into(), "SHOW_SEASON".into()],
            packages: Vec::new(),
            monetization_types: vec![
                "FLATRATE".into(),
                "FREE".into(),
                "BUY".into(),
                "RENT".into(),
                "ADS".into(),
            ],
            release_year: None,
        }
    }
}

/// A lower bound on a title's original release year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReleaseYearRange {
    /// Earliest release year to include.
    pub min: i32,
}

/// One edge of a day's new-titles page.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct NewTitle {
    /// JustWatch object id of the title node.
    pub object_id: Option<i64>,
    /// Concrete node type (e.g., "Movie", "Season").
    pub object_type: Option<String>,
    /// Localized title.
    pub title: Option<String>,
    /// Site-relative detail path (e.g., "/us/movie/...").
    pub full_path: Option<String>,
    /// Poster image URL in the requested profile and format.
    pub poster_url: Option<String>,
    /// The title's original release year.
    pub original_release_year: Option<i32>,
    /// IMDb score, when scoring data is available.
    pub imdb_score: Option<f64>,
    /// Number of episodes, for season nodes.
    pub total_episode_count: Option<u32>,
    /// Title of the parent show, for season nodes.
    pub show_title: Option<String>,
    /// The offer that put this title on the queried day's page.
    pub offer: Option<Offer>,
}

/// The new offer attached to a title for the queried platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offer {
    /// Direct URL to the title on the provider's site.
    pub standard_web_url: Option<String>,
    /// Monetization type of the offer (e.g., "FLATRATE", "RENT").
    pub monetization_type: Option<String>,
    /// The provider package carrying the offer.
    pub package: Option<Provider>,
}
