//! Delayed actions bound to the lifetime of a mounted view.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Source of delays. Lets pages use a browser timer while tests drive a
/// paused tokio clock.
pub trait Clock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Clock backed by the tokio timer. Needs a tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// Outcome of [`ViewScope::run_after`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fired {
    Ran,
    Cancelled,
}

/// Cancellation scope living exactly as long as one mounted view.
///
/// The view creates it on mount and calls [`ViewScope::close`] on teardown.
/// Clones share the same scope.
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&self) {
        self.token.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run `action` once `delay` has elapsed, unless the scope closes first.
    pub async fn run_after<C, F>(&self, clock: &C, delay: Duration, action: F) -> Fired
    where
        C: Clock,
        F: FnOnce(),
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Fired::Cancelled,
            _ = clock.sleep(delay) => {
                if self.token.is_cancelled() {
                    return Fired::Cancelled;
                }
                action();
                Fired::Ran
            }
        }
    }
}
