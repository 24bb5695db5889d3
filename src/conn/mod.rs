//! Collaborator seams: the connection and the timer facility.
//!
//! The strategy core performs no I/O and no waiting. Everything it needs
//! from the outside world comes through two narrow traits:
//! - [`Endpoint`] — the owning connection (parameters for reports, a
//!   one-shot reconnect callable);
//! - [`Timer`] — the event-loop timer facility ([`TokioTimer`] provided).

mod endpoint;
mod timer;

pub use endpoint::{Endpoint, ReconnectFn};
pub use timer::{TimeoutHandle, Timer, TokioTimer};
