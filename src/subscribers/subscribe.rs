//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging custom report handlers
//! into the crate: log sinks, metrics counters, alerting. Subscribers are
//! driven by a [`SubscriberSet`](crate::subscribers::SubscriberSet) listener
//! fed from the event bus.
//!
//! ## Contract
//! - Implementations may be slow (I/O, batching) — they run on the listener
//!   task, never on the connection's hook path.
//! - A subscriber that lags far enough behind the bus capacity misses the
//!   skipped events (see [`Bus`](crate::events::Bus) lag handling).

use crate::events::Event;
use async_trait::async_trait;

/// Contract for report subscribers.
///
/// Called from the listener task. Implementations should avoid blocking the
/// async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handle a single event for this subscriber.
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
