//! # Built-in log subscriber.
//!
//! [`LogWriter`] maps strategy reports to `tracing` at the severity each
//! channel calls for: scheduled retries are informational, attempt failures
//! are warnings.
//!
//! ## Output shape
//! ```text
//! WARN connect attempt failed endpoint=amqp://... attempt=3 reason="connection refused: ..."
//! INFO reconnect scheduled endpoint=amqp://... attempt=3 delay_ms=4000
//! ```

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;
use async_trait::async_trait;
use tracing::{info, warn};

/// Subscriber that logs strategy reports through `tracing`.
///
/// Enabled via the `logging` feature. Implement a custom
/// [`Subscribe`] instead when you need different fields or destinations.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, event: &Event) {
        log_event(event);
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

fn log_event(e: &Event) {
    let endpoint = e.endpoint.as_deref().unwrap_or("unknown");
    let attempt = e.attempt.unwrap_or(0);

    match e.kind {
        EventKind::AttemptFailed => warn!(
            endpoint,
            attempt,
            reason = e.reason.as_deref().unwrap_or("unknown"),
            "connect attempt failed",
        ),
        EventKind::RetryScheduled => info!(
            endpoint,
            attempt,
            delay_ms = e.delay_ms.unwrap_or(0),
            "reconnect scheduled",
        ),
    }
}
