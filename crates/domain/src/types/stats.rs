//! Statistics types exposed by the metrics endpoint

use serde::{Deserialize, Serialize};

/// Snapshot of the process-wide resolver counters.
///
/// Counters live in memory only and reset when the process restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverStats {
    /// Links that could not be resolved to coordinates.
    pub maps_resolve_failures: u64,
    /// Links resolved to coordinates.
    pub maps_resolve_successes: u64,
}
