use futures_util::future::{BoxFuture, FutureExt};
use tokio::sync::mpsc;
use tokio::time;
use tracing::debug;

use treediff_primitives::Node;

use crate::{Metrics, WalkConfig, WalkScope};

/// In-order producer: sends each value of the tree rooted at `node` into
/// `tx`, left subtree first, then the node itself, then the right subtree.
///
/// Cancellation is checked non-blockingly before descending left, and the
/// send itself races the scope, so exactly one of the two happens: the
/// value is delivered to a waiting consumer, or the walk returns early. A
/// send that fails because the consumer dropped its receiver ends the walk
/// the same way: that is the leak-free early-exit path, not an error.
///
/// `walk` never closes the channel. The task that owns `tx` closes it by
/// dropping it when this future resolves, cancelled or not, so a consumer
/// always sees the channel terminate exactly once.
pub fn walk<'a>(
    scope: &'a WalkScope,
    metrics: &'a Metrics,
    config: WalkConfig,
    node: Option<&'a Node>,
    tx: &'a mpsc::Sender<i64>,
) -> BoxFuture<'a, ()> {
    async move {
        let Some(node) = node else {
            // traversal bottoms out silently
            return;
        };

        metrics.incr_nodes_walked();

        if scope.is_cancelled() {
            debug!(
                value = node.value,
                reason = ?scope.reason(),
                "walk cancelled before descending left"
            );
            return;
        }
        debug!(value = node.value, "walking node");

        if !config.step_delay.is_zero() {
            time::sleep(config.step_delay).await;
        }

        walk(scope, metrics, config, node.left.as_deref(), tx).await;

        tokio::select! {
            // biased so an already-cancelled scope always wins over a
            // consumer that happens to be ready at the same moment
            biased;
            () = scope.cancelled() => {
                debug!(
                    value = node.value,
                    reason = ?scope.reason(),
                    "walk cancelled before sending value"
                );
                return;
            }
            sent = tx.send(node.value) => {
                if sent.is_err() {
                    debug!(value = node.value, "walk output dropped by consumer");
                    return;
                }
            }
        }

        if !config.step_delay.is_zero() {
            time::sleep(config.step_delay).await;
        }

        walk(scope, metrics, config, node.right.as_deref(), tx).await;
    }
    .boxed()
}
