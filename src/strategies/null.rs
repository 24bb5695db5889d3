//! # The strategy that never retries.
//!
//! [`NullReconnectStrategy`] inherits every no-op hook and reports
//! `can_reconnect() == false`. Install it when the caller wants
//! connection-attempt semantics without any automatic retry: the owning
//! connection is expected to check the capability flag before relying on
//! this strategy to schedule anything.

use crate::strategies::strategy::ReconnectStrategy;
use crate::strategies::toggle::ActiveToggle;

/// Retry policy that never schedules a reconnect.
///
/// Holds only a toggle clone so `is_active`/`set_active` behave uniformly
/// across installed strategies; the flag is otherwise irrelevant here since
/// nothing is ever scheduled.
#[derive(Clone, Debug)]
pub struct NullReconnectStrategy {
    toggle: ActiveToggle,
}

impl NullReconnectStrategy {
    /// Creates the strategy with the given shared toggle.
    pub fn new(toggle: ActiveToggle) -> Self {
        Self { toggle }
    }
}

impl ReconnectStrategy for NullReconnectStrategy {
    fn toggle(&self) -> &ActiveToggle {
        &self.toggle
    }
}
