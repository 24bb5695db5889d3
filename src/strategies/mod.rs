//! Reconnection strategies and the shared activity switch.
//!
//! This module provides the capability trait and its two built-in
//! implementations:
//! - [`ReconnectStrategy`] - the hook set an owning connection drives
//! - [`NullReconnectStrategy`] - never retries (`can_reconnect() == false`)
//! - [`SimpleReconnectStrategy`] - randomized exponential backoff
//! - [`ActiveToggle`] - cloneable kill switch shared by strategy instances
//!
//! ## Choosing a strategy
//! ```text
//! NullReconnectStrategy      → one-shot connections; the caller handles
//!                              failure itself
//! SimpleReconnectStrategy    → persistent connections that should come back
//!                              on their own, with storm-safe pacing
//! ```

mod null;
mod simple;
mod strategy;
mod toggle;

pub use null::NullReconnectStrategy;
pub use simple::SimpleReconnectStrategy;
pub use strategy::ReconnectStrategy;
pub use toggle::ActiveToggle;
