//! # One-shot timer facility owned by the event-loop side.
//!
//! [`Timer`] is the seam through which a strategy requests "invoke this
//! callback after this delay" without performing any waiting itself.
//! [`TokioTimer`] is the provided implementation: each timeout is a spawned
//! task that sleeps and then fires, cancellable through the returned
//! [`TimeoutHandle`].
//!
//! Cancellation belongs to the connection/timer side. Strategies discard the
//! handle they get back; a connection that schedules its own timeouts (or
//! wraps a timer) can keep it and cancel a pending reconnect, e.g. when it
//! is being shut down for good.

use std::time::Duration;

use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::conn::endpoint::ReconnectFn;

/// Cancellation handle for a pending timeout.
///
/// Dropping the handle does **not** cancel the timeout; only
/// [`cancel`](TimeoutHandle::cancel) does.
#[derive(Clone, Debug)]
pub struct TimeoutHandle {
    token: CancellationToken,
}

impl TimeoutHandle {
    /// Wraps a cancellation token controlling one pending timeout.
    ///
    /// Custom [`Timer`] implementations use this to hand cancellation back to
    /// the caller.
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Cancels the pending timeout. The callback will not run.
    ///
    /// No effect if the timeout already fired.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the timeout has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// # One-shot timer scheduling.
///
/// `add_timeout` must return without blocking; the waiting happens wherever
/// the implementation lives (an event loop, a spawned task, a test recorder).
pub trait Timer: Send + Sync {
    /// Schedules `callback` to run once, `delay` from now.
    ///
    /// Returns a handle the caller may use to cancel the pending timeout.
    fn add_timeout(&self, delay: Duration, callback: ReconnectFn) -> TimeoutHandle;
}

/// Timer backed by the tokio runtime.
///
/// Each timeout is a spawned task: a cancellable sleep followed by the
/// callback. Must be used from within a runtime context.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn add_timeout(&self, delay: Duration, callback: ReconnectFn) -> TimeoutHandle {
        let token = CancellationToken::new();
        let guard = token.clone();

        tokio::spawn(async move {
            let sleep = time::sleep(delay);
            tokio::pin!(sleep);
            select! {
                _ = &mut sleep => callback(),
                _ = guard.cancelled() => {}
            }
        });

        TimeoutHandle::new(token)
    }
}
