use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use treediff_primitives::Node;

use crate::{walk, Metrics, WalkConfig, WalkScope};

/// Reports whether two trees hold the same values in the same in-order
/// sequence (element-wise equal and of equal length).
///
/// Both producers run concurrently under a scope private to this call. On
/// the first mismatch the comparator returns without draining the
/// remainders: it cancels the private scope and drops both receivers, so a
/// producer blocked mid-send observes one of the two and unwinds. Neither
/// task is ever left blocked.
pub async fn same_trees(
    metrics: &Arc<Metrics>,
    config: WalkConfig,
    first: Option<&Node>,
    second: Option<&Node>,
) -> bool {
    metrics.incr_equality_checks();

    let scope = WalkScope::new();
    let mut rx1 = spawn_producer(&scope, metrics, config, first.cloned());
    let mut rx2 = spawn_producer(&scope, metrics, config, second.cloned());

    let equal = loop {
        // read one value from each side per step; a closed channel on one
        // side while the other still produces means the sequences differ
        let (v1, v2) = tokio::join!(rx1.recv(), rx2.recv());
        match (v1, v2) {
            (None, None) => break true,
            (Some(a), Some(b)) if a == b => {}
            divergence => {
                debug!(?divergence, "sequences diverged");
                break false;
            }
        }
    };

    if !equal {
        scope.cancel();
    }

    equal
}

fn spawn_producer(
    scope: &WalkScope,
    metrics: &Arc<Metrics>,
    config: WalkConfig,
    root: Option<Node>,
) -> mpsc::Receiver<i64> {
    let (tx, rx) = mpsc::channel(1);
    let scope = scope.clone();
    let metrics = Arc::clone(metrics);
    tokio::spawn(async move {
        walk(&scope, &metrics, config, root.as_ref(), &tx).await;
        // tx drops here, closing the channel exactly once
    });
    rx
}
