//! justwatch-rs: ergonomic JustWatch GraphQL client.
//!
//! The crate is organized around a shared [`JwClient`] and per-area builders:
//! - [`releases`] fetches the day-by-day new-release timeline for a country.
//! - [`providers`] fetches the streaming-provider catalog for a country.
//!
//! Lower-level GraphQL plumbing (query descriptors, endpoint execution, the
//! response cache contract) lives in [`crate::core`] and is public so callers
//! can issue their own queries against the same endpoint.

pub mod core;
pub mod providers;
pub mod releases;

pub use crate::core::cache::{MemoryCache, ResponseCache};
pub use crate::core::graphql::{execute_query, execute_query_with_cache};
pub use crate::core::query::GraphQlQuery;
pub use crate::core::{JwClient, JwClientBuilder, JwError};
pub use providers::{Provider, ProvidersBuilder};
pub use releases::{NewTitle, NewTitlesBuilder, Offer, ReleaseYearRange, TitleFilter};
