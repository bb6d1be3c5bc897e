use std::sync::{Arc, OnceLock};
use std::time::Duration;

use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};
use tracing::debug;

/// Why a scope was cancelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CancelReason {
    /// The caller requested cancellation.
    Explicit,
    /// The scope's deadline expired.
    Timeout,
}

/// Cooperative cancellation scope shared by one comparison or diff run and
/// every producer it spawns.
///
/// The transition is one-way: once cancelled, a scope stays cancelled, and
/// [`reason`](Self::reason) reports the first cause that fired. Clones
/// share state, so handing a clone to each spawned task gives the whole
/// run a single shutdown signal.
#[derive(Clone, Debug)]
pub struct WalkScope {
    token: CancellationToken,
    reason: Arc<OnceLock<CancelReason>>,
}

impl WalkScope {
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            reason: Arc::new(OnceLock::new()),
        }
    }

    /// Scope that cancels itself with [`CancelReason::Timeout`] once
    /// `deadline` has elapsed.
    ///
    /// Must be called from within a tokio runtime; the deadline timer runs
    /// as a background task that also exits if the scope is cancelled
    /// explicitly first.
    #[must_use]
    pub fn with_timeout(deadline: Duration) -> Self {
        let scope = Self::new();
        let timer = scope.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(deadline) => {
                    if timer.reason.set(CancelReason::Timeout).is_ok() {
                        debug!(?deadline, "scope deadline expired");
                        timer.token.cancel();
                    }
                }
                () = timer.token.cancelled() => {}
            }
        });
        scope
    }

    /// Request cancellation. Idempotent; the recorded reason never changes
    /// once set.
    pub fn cancel(&self) {
        let _ = self.reason.set(CancelReason::Explicit);
        self.token.cancel();
    }

    /// Non-blocking poll.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until the scope is cancelled.
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }

    /// The recorded cause, or `None` while the scope is still active.
    #[must_use]
    pub fn reason(&self) -> Option<CancelReason> {
        self.reason.get().copied()
    }
}

impl Default for WalkScope {
    fn default() -> Self {
        Self::new()
    }
}
