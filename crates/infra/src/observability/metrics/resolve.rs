//! Maps link resolution metrics
//!
//! Tracks how many links were resolved to coordinates and how many were
//! not, whatever the cause of the failure.
//!
//! ## Design
//! - **Relaxed ordering** - counters are independent and only need to be
//!   eventually visible
//! - **No locking needed** - simple atomic counters
//! - **In-memory only** - values reset when the process restarts

use std::sync::atomic::{AtomicU64, Ordering};

use cartevv_core::ResolveMetricsPort;
use cartevv_domain::ResolverStats;

/// Metrics for maps link resolution outcomes
#[derive(Debug, Default)]
pub struct ResolveMetrics {
    /// Number of links resolved to coordinates
    pub resolved: AtomicU64,
    /// Number of links that could not be resolved
    pub unresolved: AtomicU64,
}

impl ResolveMetrics {
    /// Create new ResolveMetrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the failure count
    pub fn get_failure_count(&self) -> u64 {
        self.unresolved.load(Ordering::Relaxed)
    }

    /// Get the success count
    pub fn get_success_count(&self) -> u64 {
        self.resolved.load(Ordering::Relaxed)
    }
}

impl ResolveMetricsPort for ResolveMetrics {
    fn record_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    fn record_unresolved(&self) {
        self.unresolved.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> ResolverStats {
        ResolverStats {
            maps_resolve_failures: self.get_failure_count(),
            maps_resolve_successes: self.get_success_count(),
        }
    }
}
