use justwatch_rs::GraphQlQuery;
use serde_json::json;

use crate::common::vars;

#[test]
fn operation_name_is_parsed_from_the_document() {
    let query = GraphQlQuery::new("query GetProviders($country: Country!) { packages }");
    assert_eq!(query.operation(), Some("GetProviders"));
}

#[test]
fn operation_name_keyword_is_case_insensitive() {
    let query = GraphQlQuery::new("  QUERY Get_Titles2 { newTitles }");
    assert_eq!(query.operation(), Some("Get_Titles2"));
}

#[test]
fn shorthand_document_has_no_operation_name() {
    assert_eq!(GraphQlQuery::new("{ packages }").operation(), None);
    // "query{...}" declares no name either; the keyword needs trailing whitespace.
    assert_eq!(GraphQlQuery::new("query{ packages }").operation(), None);
    assert_eq!(GraphQlQuery::new("mutation Add { add }").operation(), None);
}

#[test]
fn build_serializes_query_and_merged_variables() {
    let query = GraphQlQuery::new("query Ping { ping }")
        .default_variable("a", 1)
        .default_variable("b", 2);

    let request = serde_json::to_value(query.build(vars(json!({ "b": 3, "c": 4 })))).unwrap();

    assert_eq!(
        request,
        json!({
            "query": "query Ping { ping }",
            "variables": { "a": 1, "b": 3, "c": 4 }
        })
    );
}

#[test]
fn caller_variables_win_on_collision() {
    let query = GraphQlQuery::new("query Ping { ping }").default_variable("date", "2024-01-01");

    let request = serde_json::to_value(query.build(vars(json!({ "date": "2024-06-30" })))).unwrap();

    assert_eq!(request["variables"]["date"], json!("2024-06-30"));
}

#[test]
fn merge_is_shallow_nested_objects_replaced_wholesale() {
    let query = GraphQlQuery::new("query Ping { ping }")
        .default_variable("filter", json!({ "packages": ["nfx"], "first": 10 }));

    let request =
        serde_json::to_value(query.build(vars(json!({ "filter": { "first": 20 } })))).unwrap();

    // The default "packages" key is gone: no deep merge.
    assert_eq!(request["variables"]["filter"], json!({ "first": 20 }));
}

#[test]
fn defaults_are_not_mutated_by_build() {
    let query = GraphQlQuery::new("query Ping { ping }").default_variable("a", 1);

    let first = serde_json::to_value(query.build(vars(json!({ "a": 99 })))).unwrap();
    let second = serde_json::to_value(query.build(vars(json!({})))).unwrap();

    assert_eq!(first["variables"]["a"], json!(99));
    assert_eq!(second["variables"]["a"], json!(1));
}
