use serde::Serialize;

/// One streaming provider from a country's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provider {
    /// The short package identifier used in title filters (e.g., "dnp").
    pub short_name: Option<String>,
    /// The human-readable provider name (e.g., "Disney Plus").
    pub clear_name: Option<String>,
}
