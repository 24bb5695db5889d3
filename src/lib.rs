//! # redial
//!
//! **Redial** provides pluggable reconnection strategies for persistent
//! client connections.
//!
//! A strategy observes the lifecycle of a connection it advises — attempt
//! started, attempt failed, transport up/down, session opened/closed — and
//! decides, on closure, whether to schedule a future reconnect and with what
//! delay. The crate is a policy core: it performs no I/O, parses no
//! protocol, and never blocks. The connection, the timer that actually
//! waits, and the log sink are collaborators reached through narrow traits.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  owning connection (external)
//!  ┌──────────────────────────┐  lifecycle hooks   ┌───────────────────────────┐
//!  │ sockets / handshake /    │ ─────────────────► │  dyn ReconnectStrategy    │
//!  │ session management       │                    │  ├─ NullReconnectStrategy │
//!  └──────────┬───────────────┘                    │  └─ SimpleReconnect-      │
//!             ▲                                    │     Strategy              │
//!             │ reconnect fires                    └───┬───────────┬───────────┘
//!             │                                        │           │
//!  ┌──────────┴─────────┐  add_timeout(delay, cb)      │           │ publish(Event)
//!  │ Timer (TokioTimer) │ ◄────────────────────────────┘           ▼
//!  └────────────────────┘                                  ┌───────────────┐
//!                          BackoffPolicy × JitterSource    │ Bus (events)  │
//!                          decide the delay                └───────┬───────┘
//!                                                                  │ broadcast
//!                                                          ┌───────▼────────┐
//!                                                          │ SubscriberSet  │
//!                                                          └──┬──────────┬──┘
//!                                                             ▼          ▼
//!                                                         LogWriter   custom
//! ```
//!
//! ### Lifecycle
//! ```text
//! connection drives the installed strategy:
//!
//!   on_connect_attempt ──────────► attempts_since_last_success += 1
//!   on_connect_attempt_failure ──► publish AttemptFailed (warn)
//!   on_transport_connected ─────► (no-op for built-in strategies)
//!   on_transport_disconnected ──► (no-op for built-in strategies)
//!   on_connection_open ─────────► reset: delay = initial, attempts = 0
//!   on_connection_closed:
//!       ├─ toggle inactive  → return (nothing computed, nothing scheduled)
//!       ├─ delay = min(max, delay × ((draw × jitter) + 1) × multiplier)
//!       ├─ publish RetryScheduled (info)
//!       └─ timer.add_timeout(delay, conn.reconnect_handle())
//! ```
//!
//! ## Features
//! | Area           | Description                                                  | Key types / traits                                  |
//! |----------------|--------------------------------------------------------------|-----------------------------------------------------|
//! | **Strategies** | Pluggable retry policies with a uniform hook set.            | [`ReconnectStrategy`], [`NullReconnectStrategy`], [`SimpleReconnectStrategy`] |
//! | **Policies**   | Delay growth parameters and the jitter draw.                 | [`BackoffPolicy`], [`JitterSource`], [`RandomJitter`] |
//! | **Switch**     | Shared kill switch pausing every strategy that holds it.     | [`ActiveToggle`]                                    |
//! | **Seams**      | Narrow traits for the connection and the timer facility.     | [`Endpoint`], [`Timer`], [`TokioTimer`]             |
//! | **Reports**    | Typed events on a broadcast bus, fan-out to subscribers.     | [`Event`], [`Bus`], [`Subscribe`], [`SubscriberSet`] |
//! | **Errors**     | Failure vocabulary for connect attempts.                     | [`ConnectError`]                                    |
//!
//! ## Optional features
//! - `logging`: exports [`LogWriter`], a built-in subscriber forwarding
//!   reports to `tracing`.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use redial::{
//!     ActiveToggle, BackoffPolicy, Bus, Endpoint, ReconnectFn, ReconnectStrategy,
//!     SimpleReconnectStrategy, SubscriberSet, TokioTimer,
//! };
//!
//! struct Client {
//!     url: String,
//! }
//!
//! impl Endpoint for Client {
//!     fn parameters(&self) -> &str {
//!         &self.url
//!     }
//!
//!     fn reconnect_handle(&self) -> ReconnectFn {
//!         // A real connection captures a handle into its event loop here.
//!         Box::new(|| {})
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let bus = Bus::default();
//!     let listener = SubscriberSet::new(Vec::new()).listen(&bus);
//!
//!     let mut strategy = SimpleReconnectStrategy::new(
//!         BackoffPolicy::default(),
//!         Arc::new(TokioTimer),
//!         bus.clone(),
//!         ActiveToggle::default(),
//!     );
//!
//!     let client = Client {
//!         url: "amqp://guest@localhost:5672".into(),
//!     };
//!
//!     // The owning connection calls the hooks at its lifecycle points.
//!     strategy.on_connect_attempt(&client);
//!     strategy.on_transport_connected(&client);
//!     strategy.on_connection_open(&client);
//!     strategy.on_connection_closed(&client); // schedules a reconnect
//!
//!     drop(strategy);
//!     drop(bus);
//!     let _ = listener.await;
//! }
//! ```

mod conn;
mod error;
mod events;
mod policies;
mod strategies;
mod subscribers;

// ---- Public re-exports ----

pub use conn::{Endpoint, ReconnectFn, TimeoutHandle, Timer, TokioTimer};
pub use error::ConnectError;
pub use events::{Bus, Event, EventKind};
pub use policies::{BackoffPolicy, JitterSource, RandomJitter};
pub use strategies::{
    ActiveToggle, NullReconnectStrategy, ReconnectStrategy, SimpleReconnectStrategy,
};
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: expose the built-in tracing-backed log subscriber.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
