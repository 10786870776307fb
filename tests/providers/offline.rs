use httpmock::{Method::POST, Mock, MockServer};
use justwatch_rs::{JwError, ProvidersBuilder, providers, providers::PROVIDERS_QUERY};
use serde_json::json;

use crate::common;

fn mock_catalog(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST).path("/graphql").json_body(json!({
            "query": PROVIDERS_QUERY,
            "variables": { "country": "US", "platform": "WEB" }
        }));
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("providers_us.json"));
    })
}

#[tokio::test]
async fn fetches_and_parses_the_catalog() {
    let server = common::setup_server();
    let mock = mock_catalog(&server);

    let client = common::client(&server);
    let catalog = providers::providers(&client, "us").await.unwrap();

    mock.assert();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog[0].short_name.as_deref(), Some("nfx"));
    assert_eq!(catalog[0].clear_name.as_deref(), Some("Netflix"));
}

#[tokio::test]
async fn lookup_ignores_case_and_surrounding_whitespace() {
    let server = common::setup_server();
    mock_catalog(&server);

    let client = common::client(&server);

    // The catalog entry is " Disney Plus " with stray whitespace.
    let provider = ProvidersBuilder::new(&client, "us")
        .lookup("Disney Plus")
        .await
        .unwrap();

    assert_eq!(provider.short_name.as_deref(), Some("dnp"));
}

#[tokio::test]
async fn lookup_miss_enumerates_every_catalog_name() {
    let server = common::setup_server();
    mock_catalog(&server);

    let client = common::client(&server);

    let err = ProvidersBuilder::new(&client, "us")
        .lookup("Hulu")
        .await
        .unwrap_err();

    match &err {
        JwError::ProviderNotFound {
            name,
            country,
            available,
        } => {
            assert_eq!(name, "Hulu");
            assert_eq!(country, "us");
            for listed in ["Netflix", "Disney Plus", "Amazon Prime Video", "Apple TV+"] {
                assert!(available.contains(listed), "missing {listed} in {available}");
            }
        }
        other => panic!("expected provider-not-found, got: {other}"),
    }

    let message = err.to_string();
    assert!(message.starts_with("provider \"Hulu\" not available in \"us\""));
}

#[tokio::test]
async fn catalog_is_cached_by_default() {
    let server = common::setup_server();
    let mock = mock_catalog(&server);

    let client = common::cached_client(&server);

    let first = ProvidersBuilder::new(&client, "us").fetch().await.unwrap();
    let second = ProvidersBuilder::new(&client, "us").fetch().await.unwrap();

    mock.assert_hits(1);
    assert_eq!(first, second);
}
