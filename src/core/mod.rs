//! Core components of the `justwatch-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`JwClient`] and its builder.
//! - The primary [`JwError`] type.
//! - The [`GraphQlQuery`] descriptor and endpoint execution functions.
//! - The [`ResponseCache`] contract consumed by the cached execution path.

/// The response cache contract (`ResponseCache`) and its in-memory implementation.
pub mod cache;
/// The main client (`JwClient`), builder, and configuration.
pub mod client;
/// The primary error type (`JwError`) for the crate.
pub mod error;
/// GraphQL endpoint execution: live and cached query paths.
pub mod graphql;
/// The immutable GraphQL query descriptor and per-call request building.
pub mod query;

// convenient re-exports so most code can just `use crate::core::JwClient`
pub use cache::{MemoryCache, ResponseCache};
pub use client::{JwClient, JwClientBuilder};
pub use error::JwError;
pub use query::{GraphQlQuery, GraphQlRequest};
