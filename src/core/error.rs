use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum JwError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A request body could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned a non-success HTTP status code while strict status
    /// checking is enabled. In the default (non-strict) mode the response body
    /// decides the outcome instead, because GraphQL servers commonly pair a
    /// non-2xx status with a valid error payload and vice versa.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was empty, not valid JSON, or not a JSON object.
    #[error("invalid response content (url: {url})")]
    InvalidResponse {
        /// The endpoint URL the response came from.
        url: String,
    },

    /// The decoded response carried a top-level `errors` array.
    ///
    /// The message starts with a context line naming the operation, followed by
    /// one line per reported error, suffixed with ` [line,column]` when the
    /// error reports exactly one source location.
    #[error("{message}")]
    Query {
        /// The operation name, or the empty string for an unnamed query.
        operation: String,
        /// The full, multi-line error text.
        message: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// No provider in the catalog matched the requested name.
    #[error("provider \"{name}\" not available in \"{country}\" (available: \"{available}\")")]
    ProviderNotFound {
        /// The name that was looked up.
        name: String,
        /// The country code the catalog was fetched for.
        country: String,
        /// A comma-separated list of every catalog provider name.
        available: String,
    },
}
