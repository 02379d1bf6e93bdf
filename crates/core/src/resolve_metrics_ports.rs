//! Resolve metrics port - process-wide counters for maps link resolution
//!
//! Counters are in-memory only. Implementations must be safe to share
//! across request handlers; no ordering guarantee is required beyond every
//! increment eventually becoming visible to `snapshot`.

use cartevv_domain::ResolverStats;

/// Trait for recording maps link resolution outcomes
pub trait ResolveMetricsPort: Send + Sync {
    /// Count a link resolved to coordinates.
    fn record_resolved(&self);

    /// Count a link that could not be resolved, whatever the cause.
    fn record_unresolved(&self);

    /// Current counter values.
    fn snapshot(&self) -> ResolverStats;
}
