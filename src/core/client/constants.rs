//! Centralized constants for default endpoints, UA, and cache policy.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// JustWatch GraphQL endpoint (all queries POST here).
pub(crate) const DEFAULT_GRAPHQL_URL: &str = "https://apis.justwatch.com/graphql";

/// Default TTL for the cached query path (24 hours).
pub(crate) const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(86_400);

/// Cache scope partitioning this client's entries from unrelated cached data.
pub(crate) const CACHE_SCOPE: &str = "pages";
