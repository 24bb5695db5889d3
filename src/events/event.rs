//! # Reporting events emitted by reconnection strategies.
//!
//! The [`EventKind`] enum classifies the two reporting channels a strategy
//! uses: warning-severity attempt failures and info-severity retry
//! scheduling. The [`Event`] struct carries the metadata subscribers need to
//! render a useful line: endpoint parameters, attempt count, chosen delay,
//! and the failure reason.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! delivered out of order.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use redial::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::RetryScheduled)
//!     .with_endpoint("amqp://guest@localhost:5672")
//!     .with_attempt(3)
//!     .with_delay(Duration::from_secs(4));
//!
//! assert_eq!(ev.kind, EventKind::RetryScheduled);
//! assert_eq!(ev.endpoint.as_deref(), Some("amqp://guest@localhost:5672"));
//! assert_eq!(ev.delay_ms, Some(4000));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of strategy reporting events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A connect attempt failed before any transport was established.
    ///
    /// Warning severity. Sets:
    /// - `endpoint`: identifying parameters of the connection
    /// - `attempt`: attempts since the last successful open
    /// - `reason`: failure detail from the connection
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    AttemptFailed,

    /// A reconnect was scheduled after a connection closed.
    ///
    /// Info severity. Sets:
    /// - `endpoint`: identifying parameters of the connection
    /// - `attempt`: attempts since the last successful open
    /// - `delay_ms`: delay before the reconnect fires (ms)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    RetryScheduled,
}

/// Strategy reporting event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,

    /// Identifying parameters of the connection, if applicable.
    pub endpoint: Option<Arc<str>>,
    /// Attempts since the last successful open.
    pub attempt: Option<u32>,
    /// Delay before the scheduled reconnect in milliseconds (compact).
    pub delay_ms: Option<u32>,
    /// Human-readable failure reason.
    pub reason: Option<Arc<str>>,
    /// Event classification.
    pub kind: EventKind,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            kind,
            at: SystemTime::now(),
            endpoint: None,
            attempt: None,
            delay_ms: None,
            reason: None,
        }
    }

    /// Attaches the connection's identifying parameters.
    #[inline]
    pub fn with_endpoint(mut self, endpoint: impl Into<Arc<str>>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Attaches an attempt count.
    #[inline]
    pub fn with_attempt(mut self, n: u32) -> Self {
        self.attempt = Some(n);
        self
    }

    /// Attaches the scheduled delay (stored as milliseconds).
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.delay_ms = Some(ms);
        self
    }

    /// Attaches a human-readable failure reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
