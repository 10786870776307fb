use std::time::Duration;

use serde_json::Map;

use crate::{
    core::{JwClient, JwError, graphql, query::GraphQlQuery},
    providers::{model::Provider, wire},
};

/// The GraphQL document behind [`ProvidersBuilder`](super::ProvidersBuilder).
pub const PROVIDERS_QUERY: &str = r"
query GetProviders($country: Country!, $platform: Platform!) {
    packages(country: $country, platform: $platform) {
        shortName
        clearName
    }
}";

pub(super) async fn fetch_providers(
    client: &JwClient,
    country: &str,
    cache_ttl: Option<Duration>,
) -> Result<Vec<Provider>, JwError> {
    let query = GraphQlQuery::new(PROVIDERS_QUERY)
        .default_variable("country", country.to_uppercase())
        .default_variable("platform", "WEB");

    // The catalog changes rarely; a parameter-free query per country is cache-eligible.
    let data: wire::PackagesData =
        graphql::execute_query_with_cache_into(client, &query, Map::new(), cache_ttl).await?;

    let providers = data
        .packages
        .unwrap_or_default()
        .into_iter()
        .map(|p| Provider {
            short_name: p.short_name,
            clear_name: p.clear_name,
        })
        .collect();

    Ok(providers)
}

pub(super) fn match_provider(
    providers: &[Provider],
    name: &str,
    country: &str,
) -> Result<Provider, JwError> {
    let needle = name.trim().to_lowercase();

    if let Some(found) = providers.iter().find(|p| {
        p.clear_name
            .as_deref()
            .is_some_and(|clear| clear.trim().to_lowercase() == needle)
    }) {
        return Ok(found.clone());
    }

    let available = providers
        .iter()
        .filter_map(|p| p.clear_name.as_deref())
        .collect::<Vec<_>>()
        .join(", ");

    Err(JwError::ProviderNotFound {
        name: name.to_string(),
        country: country.to_string(),
        available,
    })
}
