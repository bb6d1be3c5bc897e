//! Concurrent comparison and structural diffing of binary trees.
//!
//! Two producer tasks stream a tree's values in in-order sequence through
//! rendezvous-sized channels; a consumer merges the two sequences in
//! lockstep and either decides equality ([`same_trees`]) or emits a stream
//! of positional [`DiffEvent`](treediff_primitives::DiffEvent)s
//! ([`diff_trees`]). A run and every task it spawns share one [`WalkScope`]
//! for cooperative cancellation, and report activity into a caller-owned
//! [`Metrics`] collector.
//!
//! ## Core invariants
//!
//! - Values leave a producer in strict in-order traversal sequence.
//! - Channels are the only producer→consumer handoff; the metrics
//!   collector is the only shared-mutable state, behind its own mutex.
//! - Every spawned task terminates on natural completion or cancellation;
//!   no task is ever left blocked after its parent operation returns.

use std::time::Duration;

mod cancel;
mod compare;
mod diff;
mod metrics;
mod walk;


pub use cancel::{CancelReason, WalkScope};
pub use compare::same_trees;
pub use diff::diff_trees;
pub use metrics::Metrics;
pub use walk::walk;

/// Producer tuning.
#[derive(Copy, Clone, Debug, Default)]
pub struct WalkConfig {
    /// Artificial pause before and after each node's own emission.
    ///
    /// Zero (the default) disables it; a nonzero delay makes cancellation
    /// observable mid-traversal, which is what the timeout tests rely on.
    pub step_delay: Duration,
}
