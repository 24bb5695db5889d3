//! Backoff parameters and randomness.
//!
//! This module groups the knobs that control **how long** a strategy waits
//! before asking for a reconnect, and **where the randomness** in that wait
//! comes from.
//!
//! ## Contents
//! - [`BackoffPolicy`] how reconnect delays evolve (initial / multiplier / max / jitter)
//! - [`JitterSource`], [`RandomJitter`] uniform draw feeding the jitter term
//!
//! ## Quick wiring
//! ```text
//! SimpleReconnectStrategy { policy: BackoffPolicy, jitter: Box<dyn JitterSource>, .. }
//!      └─► on_connection_closed: policy.next_delay(current, jitter.draw())
//! ```
//!
//! ## Defaults
//! - `BackoffPolicy::default()` → initial=1s, multiplier=2.0, max=30s, jitter=0.5.
//! - `RandomJitter::from_os_rng()` in production; `RandomJitter::seeded(n)`
//!   for reproducible delay sequences.

mod backoff;
mod jitter;

pub use backoff::BackoffPolicy;
pub use jitter::{JitterSource, RandomJitter};
