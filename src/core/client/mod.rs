//! Public client surface + builder.
//! Defaults (endpoint, UA, cache policy) live in `constants`.

mod constants;

use crate::core::JwError;
use crate::core::cache::ResponseCache;
use constants::{CACHE_SCOPE, DEFAULT_CACHE_TTL, DEFAULT_GRAPHQL_URL, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

#[derive(Clone)]
pub struct JwClient {
    http: Client,
    graphql_url: Url,
    extra_headers: Vec<(String, String)>,
    strict_status: bool,
    cache: Option<Arc<dyn ResponseCache>>,
}

impl Default for JwClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl JwClient {
    /// Create a new builder.
    pub fn builder() -> JwClientBuilder {
        JwClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn extra_headers(&self) -> &[(String, String)] {
        &self.extra_headers
    }

    pub(crate) fn strict_status(&self) -> bool {
        self.strict_status
    }

    /// The GraphQL endpoint URL every query is POSTed to.
    pub fn graphql_url(&self) -> &Url {
        &self.graphql_url
    }

    /// Whether a response cache has been configured.
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// The default TTL used by the cached query path when none is given.
    #[must_use]
    pub const fn default_cache_ttl() -> Duration {
        DEFAULT_CACHE_TTL
    }

    pub(crate) fn cache_get(&self, key: &str) -> Option<String> {
        self.cache.as_ref()?.get(CACHE_SCOPE, key)
    }

    pub(crate) fn cache_put(&self, key: &str, body: &str, ttl: Duration) {
        if let Some(cache) = &self.cache {
            cache.set(CACHE_SCOPE, key, body.to_string(), ttl);
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct JwClientBuilder {
    user_agent: Option<String>,
    graphql_url: Option<Url>,
    extra_headers: Vec<(String, String)>,
    strict_status: bool,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache: Option<Arc<dyn ResponseCache>>,
}

impl JwClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the GraphQL endpoint URL (e.g., `https://apis.justwatch.com/graphql`).
    #[must_use]
    pub fn graphql_url(mut self, url: Url) -> Self {
        self.graphql_url = Some(url);
        self
    }

    /// Append an extra header to every request.
    ///
    /// The fixed `Content-Type: application/json` and `Accept: application/json`
    /// headers are always sent first and cannot be replaced from here.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    /// Treat any non-success HTTP status as an error before the body is read.
    ///
    /// Off by default: the endpoint routinely pairs HTTP 200 with an `errors`
    /// payload and non-200 with a decodable body, so the decoded body decides.
    #[must_use]
    pub const fn strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Install a response cache for the cached query path.
    /// If no cache is installed, cached calls degrade to live fetches.
    #[must_use]
    pub fn cache(mut self, cache: Arc<dyn ResponseCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Install a fresh in-process [`MemoryCache`](crate::core::cache::MemoryCache).
    #[must_use]
    pub fn memory_cache(self) -> Self {
        self.cache(Arc::new(crate::core::cache::MemoryCache::new()))
    }

    pub fn build(self) -> Result<JwClient, JwError> {
        let graphql_url = self.graphql_url.unwrap_or(Url::parse(DEFAULT_GRAPHQL_URL)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(JwClient {
            http,
            graphql_url,
            extra_headers: self.extra_headers,
            strict_status: self.strict_status,
            cache: self.cache,
        })
    }
}
