//! # The reconnection strategy capability trait.
//!
//! [`ReconnectStrategy`] declares the six lifecycle hooks an owning
//! connection calls as it moves through its connect/open/close cycle, plus
//! the shared enable/disable switch and a capability flag telling the
//! connection whether this strategy will ever schedule a retry.
//!
//! Every hook is a no-op by default, so an implementation only overrides the
//! points it cares about. Hooks take `&mut self`: they are invoked serially
//! from the connection's own event loop, and strategy state needs no
//! internal locking.

use crate::conn::Endpoint;
use crate::error::ConnectError;
use crate::strategies::toggle::ActiveToggle;

/// # Pluggable retry policy for a persistent connection.
///
/// The owning connection holds a `Box<dyn ReconnectStrategy>` and calls the
/// hooks at the stated lifecycle points. The hook set is identical across
/// implementations, so the connection is agnostic to which policy is
/// installed; it only checks [`can_reconnect`](ReconnectStrategy::can_reconnect)
/// when it needs to know whether retries will ever be scheduled.
pub trait ReconnectStrategy: Send {
    /// The shared switch this strategy consults before scheduling retries.
    ///
    /// Strategies that should pause together are constructed with clones of
    /// the same [`ActiveToggle`].
    fn toggle(&self) -> &ActiveToggle;

    /// Whether reconnect scheduling is currently enabled.
    fn is_active(&self) -> bool {
        self.toggle().is_active()
    }

    /// Enables or disables reconnect scheduling for every strategy sharing
    /// this toggle.
    fn set_active(&self, active: bool) {
        self.toggle().set_active(active);
    }

    /// Whether scheduling a retry is ever meaningful for this strategy.
    ///
    /// A connection should check this before relying on the strategy to
    /// schedule anything on closure.
    fn can_reconnect(&self) -> bool {
        false
    }

    /// A connect attempt is beginning.
    fn on_connect_attempt(&mut self, _conn: &dyn Endpoint) {}

    /// The attempt failed before any transport was established.
    ///
    /// `err` carries failure detail for reporting; it is never inspected or
    /// re-raised here.
    fn on_connect_attempt_failure(&mut self, _conn: &dyn Endpoint, _err: &ConnectError) {}

    /// The low-level transport came up.
    fn on_transport_connected(&mut self, _conn: &dyn Endpoint) {}

    /// The low-level transport went down.
    fn on_transport_disconnected(&mut self, _conn: &dyn Endpoint) {}

    /// The full logical session succeeded and is ready for use.
    fn on_connection_open(&mut self, _conn: &dyn Endpoint) {}

    /// The logical session ended, gracefully or due to failure.
    fn on_connection_closed(&mut self, _conn: &dyn Endpoint) {}
}
