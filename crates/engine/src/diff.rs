use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::task::TaskTracker;
use tracing::debug;

use treediff_primitives::{DiffEvent, Node};

use crate::{walk, Metrics, WalkConfig, WalkScope};

/// Streams every position at which the two trees' in-order sequences
/// disagree, by value or by presence.
///
/// Two producers run under the caller's shared `scope`, feeding a merge
/// task that pairs their outputs positionally. Events are delivered to the
/// returned stream as soon as they are produced; the stream closes when
/// the merge completes or the scope is cancelled, never hanging open. A
/// supervisor task awaits all three workers purely for cleanup
/// bookkeeping; it does not gate delivery.
pub fn diff_trees(
    scope: &WalkScope,
    metrics: &Arc<Metrics>,
    config: WalkConfig,
    first: Option<&Node>,
    second: Option<&Node>,
) -> ReceiverStream<DiffEvent> {
    metrics.incr_diff_runs();

    let tracker = TaskTracker::new();
    let (out_tx, out_rx) = mpsc::channel(1);

    let rx1 = spawn_producer(&tracker, scope, metrics, config, first.cloned());
    let rx2 = spawn_producer(&tracker, scope, metrics, config, second.cloned());

    tracker.spawn(merge(
        scope.clone(),
        Arc::clone(metrics),
        rx1,
        rx2,
        out_tx,
    ));

    tracker.close();
    tokio::spawn(async move {
        tracker.wait().await;
        debug!("diff run tasks finished");
    });

    ReceiverStream::new(out_rx)
}

async fn merge(
    scope: WalkScope,
    metrics: Arc<Metrics>,
    mut rx1: mpsc::Receiver<i64>,
    mut rx2: mpsc::Receiver<i64>,
    out: mpsc::Sender<DiffEvent>,
) {
    let mut position: u64 = 0;
    loop {
        if scope.is_cancelled() {
            debug!(position, reason = ?scope.reason(), "diff merge cancelled");
            // dropping `out` closes the event stream
            return;
        }

        let (v1, v2) = tokio::join!(rx1.recv(), rx2.recv());
        if v1.is_none() && v2.is_none() {
            debug!(position, "both sequences exhausted, diff merge complete");
            return;
        }

        // one position per pair of reads, mismatched-presence pairs included
        position += 1;

        let event = match (v1, v2) {
            (Some(a), Some(b)) => {
                if a == b {
                    continue;
                }
                DiffEvent::value_mismatch(position, a, b)
            }
            // only this position differs: the open side may still produce,
            // so keep merging rather than terminating
            (Some(a), None) => DiffEvent::missing_in_second(position, a),
            (None, Some(b)) => DiffEvent::missing_in_first(position, b),
            (None, None) => return, // handled above
        };

        metrics.incr_diffs_found();
        if out.send(event).await.is_err() {
            debug!(position, "diff consumer dropped the stream");
            return;
        }
    }
}

fn spawn_producer(
    tracker: &TaskTracker,
    scope: &WalkScope,
    metrics: &Arc<Metrics>,
    config: WalkConfig,
    root: Option<Node>,
) -> mpsc::Receiver<i64> {
    let (tx, rx) = mpsc::channel(1);
    let scope = scope.clone();
    let metrics = Arc::clone(metrics);
    tracker.spawn(async move {
        walk(&scope, &metrics, config, root.as_ref(), &tx).await;
    });
    rx
}
