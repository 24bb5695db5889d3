//! Error types reported through the strategy hooks.
//!
//! This module defines [`ConnectError`], the vocabulary an owning connection
//! uses when telling its strategy that a connect attempt failed. The strategy
//! treats the value as opaque diagnostic data: it is reported, never
//! inspected and never re-raised.
//!
//! The type provides helper methods (`as_label`, `as_message`) for
//! logging/metrics and [`ConnectError::is_retryable`] as an advisory for the
//! owning connection when it decides whether to keep the strategy engaged.

use std::time::Duration;
use thiserror::Error;

/// # Failures of a single connect attempt.
///
/// Produced by the owning connection and handed to
/// [`ReconnectStrategy::on_connect_attempt_failure`](crate::ReconnectStrategy::on_connect_attempt_failure).
/// The strategy core has no failure modes of its own; this is the one
/// error-carrying input it ever sees.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConnectError {
    /// The attempt did not complete within the connection's own deadline.
    #[error("connect timed out after {timeout:?}")]
    Timeout {
        /// The deadline that was exceeded.
        timeout: Duration,
    },

    /// The peer actively refused the connection.
    #[error("connection refused: {reason}")]
    Refused {
        /// The underlying error message.
        reason: String,
    },

    /// The transport dropped before the session was established.
    #[error("transport lost: {reason}")]
    Lost {
        /// The underlying error message.
        reason: String,
    },

    /// Protocol negotiation failed after the transport came up.
    #[error("handshake failed: {reason}")]
    Handshake {
        /// The underlying error message.
        reason: String,
    },
}

impl ConnectError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use redial::ConnectError;
    /// use std::time::Duration;
    ///
    /// let err = ConnectError::Timeout { timeout: Duration::from_secs(3) };
    /// assert_eq!(err.as_label(), "connect_timeout");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConnectError::Timeout { .. } => "connect_timeout",
            ConnectError::Refused { .. } => "connect_refused",
            ConnectError::Lost { .. } => "transport_lost",
            ConnectError::Handshake { .. } => "handshake_failed",
        }
    }

    /// Returns a human-readable message with details about the failure.
    pub fn as_message(&self) -> String {
        match self {
            ConnectError::Timeout { timeout } => format!("timeout: {timeout:?}"),
            ConnectError::Refused { reason } => format!("refused: {reason}"),
            ConnectError::Lost { reason } => format!("transport lost: {reason}"),
            ConnectError::Handshake { reason } => format!("handshake: {reason}"),
        }
    }

    /// Indicates whether another attempt is plausibly worth making.
    ///
    /// Advisory only: the strategy never consults this; the owning connection
    /// may, before relying on a strategy to keep scheduling retries.
    /// Handshake failures are considered permanent since the peer is
    /// reachable but speaks something else.
    ///
    /// # Example
    /// ```
    /// use redial::ConnectError;
    ///
    /// let transient = ConnectError::Refused { reason: "backlog full".into() };
    /// assert!(transient.is_retryable());
    ///
    /// let permanent = ConnectError::Handshake { reason: "bad protocol header".into() };
    /// assert!(!permanent.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ConnectError::Handshake { .. })
    }
}
