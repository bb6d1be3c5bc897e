use std::sync::{Mutex, MutexGuard, PoisonError};

use treediff_primitives::MetricsSnapshot;

/// Shared counters for engine activity.
///
/// Every increment serializes through a single mutex, so concurrent tasks
/// never lose updates. Construct one collector at process start and pass
/// an `Arc<Metrics>` into each operation; there is deliberately no global
/// instance, and no reset.
#[derive(Debug, Default)]
pub struct Metrics {
    inner: Mutex<MetricsSnapshot>,
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn incr_nodes_walked(&self) {
        self.lock().nodes_walked += 1;
    }

    pub fn incr_equality_checks(&self) {
        self.lock().equality_checks += 1;
    }

    pub fn incr_diff_runs(&self) {
        self.lock().diff_runs += 1;
    }

    pub fn incr_diffs_found(&self) {
        self.lock().diffs_found += 1;
    }

    /// Consistent point-in-time copy of all counters.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, MetricsSnapshot> {
        // counter updates cannot panic, but don't let an unrelated poison
        // take the whole collector down
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
