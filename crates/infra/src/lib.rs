//! # Cartevv Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client and the maps link follower built on it
//! - In-memory resolver metrics
//! - Configuration loading
//! - Conversions from external errors into domain errors
//!
//! ## Architecture
//! - Implements traits defined in `cartevv-core`
//! - Depends on `cartevv-domain` and `cartevv-core`
//! - Contains all "impure" code (network, environment, files)

pub mod config;
pub mod errors;
pub mod http;
pub mod maps;
pub mod observability;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use maps::HttpLinkFollower;
pub use observability::metrics::ResolveMetrics;
