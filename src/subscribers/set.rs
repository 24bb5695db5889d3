//! # Listener driving a set of subscribers from the bus.
//!
//! [`SubscriberSet`] owns the subscribers and a single listener loop:
//! ```text
//! strategy ── publish(Event) ──► Bus ──► listener ──► sub1.on_event()
//!                                             └─────► sub2.on_event()
//! ```
//!
//! ## Rules
//! - Subscribers are invoked **sequentially, in registration order** for
//!   each event.
//! - A lagged listener skips the overwritten events and keeps going.
//! - The listener exits when every `Bus` handle for the channel is dropped.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::events::Bus;
use crate::subscribers::Subscribe;

/// Owns report subscribers and fans bus events out to them.
pub struct SubscriberSet {
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl SubscriberSet {
    /// Creates a set over the given subscribers.
    #[must_use]
    pub fn new(subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        Self { subscribers }
    }

    /// Spawns the listener task on the current runtime.
    ///
    /// The receiver is registered before this call returns, so events
    /// published afterwards are observed. The task ends when the bus closes
    /// (all publishing handles dropped); await the returned handle to drain
    /// remaining events during shutdown.
    pub fn listen(self, bus: &Bus) -> JoinHandle<()> {
        let mut rx = bus.subscribe();

        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ev) => {
                        for sub in &self.subscribers {
                            sub.on_event(&ev).await;
                        }
                    }
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}
