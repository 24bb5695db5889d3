//! # Report subscribers.
//!
//! This module provides the [`Subscribe`] trait and the listener that drives
//! implementations from the event bus.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   strategy ── publish(Event) ──► Bus ──► SubscriberSet::listen()
//!                                               │
//!                                          ┌────┴────┬────────┐
//!                                          ▼         ▼        ▼
//!                                       LogWriter  Metrics  Custom
//! ```
//!
//! The built-in [`LogWriter`] (feature `logging`) forwards reports to
//! `tracing`; anything else — metrics, alerting, test recorders — is a
//! custom [`Subscribe`] implementation.

mod set;
mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use set::SubscriberSet;
pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
