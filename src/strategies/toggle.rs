//! # Shared kill switch for reconnect scheduling.
//!
//! [`ActiveToggle`] is a cloneable handle over one shared flag. Every
//! strategy that should obey the same switch is constructed with a clone of
//! the same toggle; clearing it through any of them suspends reconnect
//! scheduling for all of them until re-enabled.
//!
//! The flag is the one piece of state strategies genuinely share, so it is
//! backed by an atomic and safe to flip from any thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable on/off switch shared by a set of strategies.
///
/// ## Example
/// ```rust
/// use redial::ActiveToggle;
///
/// let toggle = ActiveToggle::default();
/// let other = toggle.clone();
///
/// assert!(toggle.is_active());
/// other.set_active(false);
/// assert!(!toggle.is_active());
/// ```
#[derive(Clone, Debug)]
pub struct ActiveToggle {
    active: Arc<AtomicBool>,
}

impl ActiveToggle {
    /// Creates a toggle in the given state.
    pub fn new(active: bool) -> Self {
        Self {
            active: Arc::new(AtomicBool::new(active)),
        }
    }

    /// Whether reconnect scheduling is currently enabled.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Enables or disables reconnect scheduling for every holder of this
    /// toggle (and its clones).
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }
}

impl Default for ActiveToggle {
    /// A fresh toggle starts active.
    fn default() -> Self {
        Self::new(true)
    }
}
