use serde::{Deserialize, Serialize};

/// Point-in-time copy of the engine's counters.
///
/// All counters are monotonically increasing over a process lifetime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Nodes visited across all traversals.
    pub nodes_walked: u64,
    /// Equality comparisons started.
    pub equality_checks: u64,
    /// Diff runs started.
    pub diff_runs: u64,
    /// Diff events emitted across all diff runs.
    pub diffs_found: u64,
}
