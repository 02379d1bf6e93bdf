//! # Cartevv Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Coordinate extraction rules for maps links and pages
//! - Port/adapter interfaces (traits)
//! - The maps link resolver service
//!
//! ## Architecture Principles
//! - Only depends on `cartevv-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod localization;

// Infrastructure ports
pub mod resolve_metrics_ports;

pub use localization::ports::{FollowedLink, LinkFollower};
pub use localization::MapsLinkResolver;
pub use resolve_metrics_ports::ResolveMetricsPort;
