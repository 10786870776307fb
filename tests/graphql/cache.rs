use std::time::Duration;

use httpmock::Method::POST;
use justwatch_rs::{GraphQlQuery, JwError, execute_query, execute_query_with_cache};
use serde_json::json;

use crate::common::{self, vars};

const CATALOG_QUERY: &str = "query GetProviders($country: Country!) { packages { shortName } }";

#[tokio::test]
async fn fresh_hit_returns_identical_data_without_a_second_network_call() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":{"packages":[{"shortName":"nfx"}]}}"#);
    });

    let client = common::cached_client(&server);
    let query = GraphQlQuery::new(CATALOG_QUERY).default_variable("country", "US");

    let first = execute_query_with_cache(&client, &query, vars(json!({})), None)
        .await
        .unwrap();
    let second = execute_query_with_cache(&client, &query, vars(json!({})), None)
        .await
        .unwrap();

    mock.assert_hits(1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn different_variables_use_different_cache_entries() {
    let server = common::setup_server();

    let us_mock = server.mock(|when, then| {
        when.method(POST).path("/graphql").json_body(json!({
            "query": CATALOG_QUERY,
            "variables": { "country": "US" }
        }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":{"packages":[{"shortName":"nfx"}]}}"#);
    });
    let de_mock = server.mock(|when, then| {
        when.method(POST).path("/graphql").json_body(json!({
            "query": CATALOG_QUERY,
            "variables": { "country": "DE" }
        }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":{"packages":[{"shortName":"dnp"}]}}"#);
    });

    let client = common::cached_client(&server);
    let query = GraphQlQuery::new(CATALOG_QUERY);

    let us = execute_query_with_cache(&client, &query, vars(json!({"country": "US"})), None)
        .await
        .unwrap();
    let de = execute_query_with_cache(&client, &query, vars(json!({"country": "DE"})), None)
        .await
        .unwrap();
    // Same variables again: served from cache, not the network.
    let us_again = execute_query_with_cache(&client, &query, vars(json!({"country": "US"})), None)
        .await
        .unwrap();

    us_mock.assert_hits(1);
    de_mock.assert_hits(1);
    assert_ne!(us, de);
    assert_eq!(us, us_again);
}

#[tokio::test]
async fn expired_entry_triggers_exactly_one_refetch() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":{"packages":[]}}"#);
    });

    let client = common::cached_client(&server);
    let query = GraphQlQuery::new(CATALOG_QUERY);
    let ttl = Some(Duration::from_millis(200));

    execute_query_with_cache(&client, &query, vars(json!({})), ttl)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(450)).await;

    execute_query_with_cache(&client, &query, vars(json!({})), ttl)
        .await
        .unwrap();
    // The refetch re-populated the cache; this one is a hit again.
    execute_query_with_cache(&client, &query, vars(json!({})), ttl)
        .await
        .unwrap();

    mock.assert_hits(2);
}

#[tokio::test]
async fn uncached_path_neither_reads_nor_writes_the_cache() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":{"packages":[]}}"#);
    });

    let client = common::cached_client(&server);
    let query = GraphQlQuery::new(CATALOG_QUERY);

    execute_query(&client, &query, vars(json!({}))).await.unwrap();
    execute_query(&client, &query, vars(json!({}))).await.unwrap();
    mock.assert_hits(2);

    // Nothing was written by the live path: the first cached call still fetches.
    execute_query_with_cache(&client, &query, vars(json!({})), None)
        .await
        .unwrap();
    mock.assert_hits(3);

    execute_query_with_cache(&client, &query, vars(json!({})), None)
        .await
        .unwrap();
    mock.assert_hits(3);
}

#[tokio::test]
async fn failing_responses_are_never_cached() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"errors":[{"message":"upstream hiccup"}]}"#);
    });

    let client = common::cached_client(&server);
    let query = GraphQlQuery::new(CATALOG_QUERY);

    let first = execute_query_with_cache(&client, &query, vars(json!({})), None).await;
    let second = execute_query_with_cache(&client, &query, vars(json!({})), None).await;

    assert!(matches!(first, Err(JwError::Query { .. })));
    assert!(matches!(second, Err(JwError::Query { .. })));
    // Both attempts went to the network: the error body was not replayed from cache.
    mock.assert_hits(2);
}

#[tokio::test]
async fn without_a_cache_the_cached_path_degrades_to_live_fetches() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/graphql");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":{"packages":[]}}"#);
    });

    let client = common::client(&server);
    let query = GraphQlQuery::new(CATALOG_QUERY);

    execute_query_with_cache(&client, &query, vars(json!({})), None)
        .await
        .unwrap();
    execute_query_with_cache(&client, &query, vars(json!({})), None)
        .await
        .unwrap();

    mock.assert_hits(2);
}
