//! GraphQL endpoint execution.
//!
//! Two entry points share one validation path: [`execute_query`] always
//! performs a live round trip, while [`execute_query_with_cache`] consults the
//! client's response cache first and writes the raw body back on a validated
//! fetch. A cache hit is decoded through the same validation as a fresh body,
//! so a hit can never bypass error detection.

use std::time::Duration;

use reqwest::header;
use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use crate::core::{JwClient, JwError, query::GraphQlQuery};

#[derive(Deserialize)]
struct Envelope {
    data: Option<Value>,
    errors: Option<Vec<ErrorEntry>>,
    extensions: Option<Value>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    message: String,
    locations: Option<Vec<SourceLocation>>,
}

#[derive(Deserialize)]
struct SourceLocation {
    #[serde(default)]
    line: u64,
    #[serde(default)]
    column: u64,
}

/// Executes a query with a live round trip, bypassing the cache entirely.
///
/// `variables` is merged over the query's default variables, caller values
/// winning on name collision. On success, returns the `data` field of the
/// response, with a top-level `extensions` object copied onto it when `data`
/// carries none of its own.
///
/// # Errors
///
/// Returns `JwError::Http` on transport failure, `JwError::InvalidResponse`
/// when the body is not a JSON object, and `JwError::Query` when the response
/// carries a top-level `errors` array.
pub async fn execute_query(
    client: &JwClient,
    query: &GraphQlQuery,
    variables: Map<String, Value>,
) -> Result<Value, JwError> {
    execute_inner(client, query, variables, None).await
}

/// Executes a query through the client's response cache.
///
/// The cache key is derived from the endpoint URL and the serialized request,
/// so any difference in document or merged variables is a different entry. On
/// a fresh hit the cached body is validated and returned without a network
/// call. On miss or expiry the query is fetched live and the raw body is
/// cached for `ttl` (default: 24 hours) once validation succeeds; bodies that
/// fail validation are never cached.
///
/// With no cache installed on the client this degrades to a live fetch.
///
/// # Errors
///
/// Same contract as [`execute_query`].
pub async fn execute_query_with_cache(
    client: &JwClient,
    query: &GraphQlQuery,
    variables: Map<String, Value>,
    ttl: Option<Duration>,
) -> Result<Value, JwError> {
    let ttl = ttl.unwrap_or(JwClient::default_cache_ttl());
    execute_inner(client, query, variables, Some(ttl)).await
}

/// [`execute_query`], deserializing the unwrapped `data` into `T`.
///
/// # Errors
///
/// Same contract as [`execute_query`], plus `JwError::Data` when `data` does
/// not match the shape of `T`.
pub async fn execute_query_into<T>(
    client: &JwClient,
    query: &GraphQlQuery,
    variables: Map<String, Value>,
) -> Result<T, JwError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data = execute_query(client, query, variables).await?;
    serde_json::from_value(data).map_err(|e| JwError::Data(format!("query result parse: {e}")))
}

/// [`execute_query_with_cache`], deserializing the unwrapped `data` into `T`.
///
/// # Errors
///
/// Same contract as [`execute_query_with_cache`], plus `JwError::Data` when
/// `data` does not match the shape of `T`.
pub async fn execute_query_with_cache_into<T>(
    client: &JwClient,
    query: &GraphQlQuery,
    variables: Map<String, Value>,
    ttl: Option<Duration>,
) -> Result<T, JwError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data = execute_query_with_cache(client, query, variables, ttl).await?;
    serde_json::from_value(data).map_err(|e| JwError::Data(format!("query result parse: {e}")))
}

async fn execute_inner(
    client: &JwClient,
    query: &GraphQlQuery,
    variables: Map<String, Value>,
    cache_ttl: Option<Duration>,
) -> Result<Value, JwError> {
    let request = query.build(variables);
    let request_json = serde_json::to_string(&request)?;
    let url = client.graphql_url();
    let cache_key = format!("{url}\n{request_json}");

    if cache_ttl.is_some()
        && let Some(cached) = client.cache_get(&cache_key)
    {
        return unwrap_response(&cached, url, query.operation());
    }

    let mut req = client
        .http()
        .post(url.clone())
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "application/json");
    for (name, value) in client.extra_headers() {
        req = req.header(name.as_str(), value.as_str());
    }
    let resp = req.body(request_json).send().await?;

    if client.strict_status() && !resp.status().is_success() {
        return Err(JwError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let text = resp.text().await?;
    let data = unwrap_response(&text, url, query.operation())?;

    if let Some(ttl) = cache_ttl {
        client.cache_put(&cache_key, &text, ttl);
    }

    Ok(data)
}

fn unwrap_response(body: &str, url: &Url, operation: Option<&str>) -> Result<Value, JwError> {
    let invalid = || JwError::InvalidResponse {
        url: url.to_string(),
    };

    let root: Value = serde_json::from_str(body).map_err(|_| invalid())?;
    if !root.is_object() {
        return Err(invalid());
    }
    let envelope: Envelope = serde_json::from_value(root).map_err(|_| invalid())?;

    // GraphQL permits partial success: an errors array alongside data is still an error.
    if let Some(errors) = envelope.errors {
        return Err(query_error(operation, &errors));
    }

    let mut data = envelope
        .data
        .ok_or_else(|| JwError::Data("response missing data field".into()))?;

    if let Some(extensions) = envelope.extensions
        && let Some(obj) = data.as_object_mut()
        && !obj.contains_key("extensions")
    {
        obj.insert("extensions".into(), extensions);
    }

    Ok(data)
}

fn query_error(operation: Option<&str>, errors: &[ErrorEntry]) -> JwError {
    let operation = operation.unwrap_or_default();
    let mut lines = vec![format!("result contains errors (query: {operation}):")];
    for error in errors {
        match error.locations.as_deref() {
            // A single reported location gets appended to the message.
            Some([location]) => lines.push(format!(
                "{} [{},{}]",
                error.message, location.line, location.column
            )),
            _ => lines.push(error.message.clone()),
        }
    }
    JwError::Query {
        operation: operation.to_string(),
        message: lines.join("\n"),
    }
}
