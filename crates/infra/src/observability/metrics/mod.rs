//! Metrics collection modules
//!
//! Thread-safe metrics for various subsystems.

pub mod resolve;

// Re-export metric types for convenience
pub use resolve::ResolveMetrics;
