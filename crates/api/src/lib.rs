//! # Cartevv API
//!
//! HTTP application layer - routes, server and main entry point.
//!
//! This crate contains:
//! - Route handlers (HTTP → core bridge)
//! - Application context (dependency injection)
//! - Error-to-response mapping
//! - Server setup and graceful shutdown
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Exposes the localization endpoints to the frontend

pub mod context;
pub mod error;
pub mod routes;
pub mod server;
pub mod utils;

// Re-export for convenience
pub use context::*;
pub use error::ApiError;
pub use routes::build_router;
