mod api;
mod model;
mod wire;

pub use api::PROVIDERS_QUERY;
pub use model::Provider;

use std::time::Duration;

use crate::{JwClient, JwError};

/// Fetches the streaming-provider catalog for a country.
///
/// # Errors
///
/// Returns `JwError` if the network request fails or the response cannot be parsed.
pub async fn providers(client: &JwClient, country: &str) -> Result<Vec<Provider>, JwError> {
    ProvidersBuilder::new(client, country).fetch().await
}

/// A builder for fetching the provider catalog of a country.
///
/// The catalog is fetched through the cached query path: with a cache
/// installed on the client, repeat fetches within the TTL reuse the stored
/// response instead of hitting the network.
pub struct ProvidersBuilder {
    client: JwClient,
    country: String,
    cache_ttl: Option<Duration>,
}

impl ProvidersBuilder {
    /// Creates a new `ProvidersBuilder` for a given country code (e.g., "us").
    pub fn new(client: &JwClient, country: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            country: country.into(),
            cache_ttl: None,
        }
    }

    /// Overrides the cache TTL for this call. Default: 24 hours.
    #[must_use]
    pub const fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Executes the request and fetches the catalog.
    ///
    /// # Errors
    ///
    /// Returns a `JwError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(country = %self.country)))]
    pub async fn fetch(self) -> Result<Vec<Provider>, JwError> {
        api::fetch_providers(&self.client, &self.country, self.cache_ttl).await
    }

    /// Fetches the catalog and resolves a human-readable provider name against
    /// it, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `JwError::ProviderNotFound` (listing every catalog name) when no
    /// entry matches, or any error from the underlying fetch.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(country = %self.country)))]
    pub async fn lookup(self, name: &str) -> Result<Provider, JwError> {
        let country = self.country.clone();
        let catalog = self.fetch().await?;
        api::match_provider(&catalog, name, &country)
    }
}
