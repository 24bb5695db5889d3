//! Strategy reports: event types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to the reports strategies emit while advising a
//! connection.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `SimpleReconnectStrategy` (attempt failures, scheduled
//!   retries).
//! - **Consumers**: `SubscriberSet::listen()` (fans out to `Subscribe`
//!   implementations) and any ad-hoc `Bus::subscribe()` receiver.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
