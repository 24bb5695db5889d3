//! # Randomized exponential backoff strategy.
//!
//! [`SimpleReconnectStrategy`] keeps a persistent connection up: every time
//! the connection closes it grows its delay by
//! `current × ((draw × jitter) + 1) × multiplier` (capped at the policy
//! maximum) and asks the timer to re-enter the connect sequence after that
//! delay.
//!
//! ## State machine
//! Two implicit states, represented purely by the counter/delay values:
//! ```text
//!                    on_connect_attempt: attempts += 1
//!                    on_connect_attempt_failure: report (warn)
//!                              │
//!   ┌─────────────┐   on_connection_closed    ┌──────────────┐
//!   │   Settled   │ ────────────────────────► │  Backing-off │──┐ grow delay,
//!   │ (just open) │                           │              │◄─┘ schedule retry
//!   └─────────────┘ ◄──────────────────────── └──────────────┘
//!                      on_connection_open
//!                      (reset delay + counter — the only reset point)
//! ```
//!
//! The multiplier applies on **every** closure, success-then-close included:
//! a connection that reconnects, stays open briefly, and drops again keeps
//! backing off, protecting the remote peer from reconnect storms across
//! repeated short-lived sessions. The jitter term keeps fleets of clients
//! with identical parameters from retrying in lockstep.

use std::sync::Arc;
use std::time::Duration;

use crate::conn::{Endpoint, Timer};
use crate::error::ConnectError;
use crate::events::{Bus, Event, EventKind};
use crate::policies::{BackoffPolicy, JitterSource, RandomJitter};
use crate::strategies::strategy::ReconnectStrategy;
use crate::strategies::toggle::ActiveToggle;

/// Retry policy implementing randomized exponential backoff.
///
/// ### Responsibilities
/// - **Attempt accounting**: counts attempts since the last successful open
/// - **Delay evolution**: grows the delay on every closure, capped by policy
/// - **Scheduling**: hands the connection's reconnect callable to the timer
/// - **Reporting**: publishes attempt failures (warn) and scheduled retries
///   (info) to the bus
///
/// ### Rules
/// - Hooks are invoked serially by the owning connection; state is mutated
///   only from hooks.
/// - `on_connection_open` is the **only** reset point.
/// - With the shared toggle cleared, closure does nothing at all.
pub struct SimpleReconnectStrategy {
    policy: BackoffPolicy,
    current_delay: Duration,
    attempts_since_last_success: u32,
    jitter: Box<dyn JitterSource>,
    timer: Arc<dyn Timer>,
    bus: Bus,
    toggle: ActiveToggle,
}

impl SimpleReconnectStrategy {
    /// Creates the strategy with an OS-seeded jitter source.
    pub fn new(policy: BackoffPolicy, timer: Arc<dyn Timer>, bus: Bus, toggle: ActiveToggle) -> Self {
        Self::with_jitter_source(policy, timer, bus, toggle, Box::new(RandomJitter::from_os_rng()))
    }

    /// Creates the strategy with a caller-provided jitter source.
    ///
    /// A seeded or scripted source makes the delay sequence exactly
    /// reproducible.
    pub fn with_jitter_source(
        policy: BackoffPolicy,
        timer: Arc<dyn Timer>,
        bus: Bus,
        toggle: ActiveToggle,
        jitter: Box<dyn JitterSource>,
    ) -> Self {
        Self {
            current_delay: policy.initial,
            attempts_since_last_success: 0,
            policy,
            jitter,
            timer,
            bus,
            toggle,
        }
    }

    /// The delay the next closure will grow from.
    pub fn current_delay(&self) -> Duration {
        self.current_delay
    }

    /// Connect attempts observed since the last successful open.
    pub fn attempts_since_last_success(&self) -> u32 {
        self.attempts_since_last_success
    }

    fn reset(&mut self) {
        self.current_delay = self.policy.initial;
        self.attempts_since_last_success = 0;
    }
}

impl ReconnectStrategy for SimpleReconnectStrategy {
    fn toggle(&self) -> &ActiveToggle {
        &self.toggle
    }

    fn can_reconnect(&self) -> bool {
        true
    }

    /// Increments the attempt counter. Success or failure of the attempt is
    /// reported through the other hooks.
    fn on_connect_attempt(&mut self, _conn: &dyn Endpoint) {
        self.attempts_since_last_success += 1;
    }

    /// Reports the failure (warn) with the running attempt count. No state
    /// mutation.
    fn on_connect_attempt_failure(&mut self, conn: &dyn Endpoint, err: &ConnectError) {
        self.bus.publish(
            Event::new(EventKind::AttemptFailed)
                .with_endpoint(conn.parameters())
                .with_attempt(self.attempts_since_last_success)
                .with_reason(err.to_string()),
        );
    }

    /// Resets the delay and the attempt counter. The only reset point.
    fn on_connection_open(&mut self, _conn: &dyn Endpoint) {
        self.reset();
    }

    /// Grows the delay, reports it (info), and schedules the reconnect.
    ///
    /// Returns immediately when the shared toggle is cleared: no draw, no
    /// delay mutation, no timer request.
    fn on_connection_closed(&mut self, conn: &dyn Endpoint) {
        if !self.is_active() {
            return;
        }

        let draw = self.jitter.draw();
        self.current_delay = self.policy.next_delay(self.current_delay, draw);

        self.bus.publish(
            Event::new(EventKind::RetryScheduled)
                .with_endpoint(conn.parameters())
                .with_delay(self.current_delay)
                .with_attempt(self.attempts_since_last_success),
        );

        // Cancellation of the pending timeout is owned by the timer side;
        // the handle is not retained here.
        let _ = self
            .timer
            .add_timeout(self.current_delay, conn.reconnect_handle());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conn::{ReconnectFn, TimeoutHandle};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio_util::sync::CancellationToken;

    struct StubEndpoint {
        fired: Arc<AtomicUsize>,
    }

    impl StubEndpoint {
        fn new() -> Self {
            Self {
                fired: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl Endpoint for StubEndpoint {
        fn parameters(&self) -> &str {
            "amqp://guest@localhost:5672"
        }

        fn reconnect_handle(&self) -> ReconnectFn {
            let fired = self.fired.clone();
            Box::new(move || {
                fired.fetch_add(1, Ordering::Relaxed);
            })
        }
    }

    /// Records requested delays and fires each callback immediately.
    #[derive(Default)]
    struct RecordingTimer {
        scheduled: Mutex<Vec<Duration>>,
    }

    impl Timer for RecordingTimer {
        fn add_timeout(&self, delay: Duration, callback: ReconnectFn) -> TimeoutHandle {
            self.scheduled.lock().unwrap().push(delay);
            callback();
            TimeoutHandle::new(CancellationToken::new())
        }
    }

    struct ScriptedJitter {
        draws: Vec<f64>,
        next: usize,
    }

    impl ScriptedJitter {
        fn new(draws: Vec<f64>) -> Self {
            Self { draws, next: 0 }
        }
    }

    impl JitterSource for ScriptedJitter {
        fn draw(&mut self) -> f64 {
            let d = self.draws[self.next % self.draws.len()];
            self.next += 1;
            d
        }
    }

    fn strategy(
        timer: Arc<RecordingTimer>,
        bus: Bus,
        toggle: ActiveToggle,
        draws: Vec<f64>,
    ) -> SimpleReconnectStrategy {
        SimpleReconnectStrategy::with_jitter_source(
            BackoffPolicy::default(),
            timer,
            bus,
            toggle,
            Box::new(ScriptedJitter::new(draws)),
        )
    }

    #[test]
    fn reports_reconnect_capability() {
        let timer = Arc::new(RecordingTimer::default());
        let s = strategy(timer, Bus::default(), ActiveToggle::default(), vec![0.0]);
        assert!(s.can_reconnect());
    }

    #[test]
    fn attempt_counter_tracks_attempts_only() {
        let timer = Arc::new(RecordingTimer::default());
        let mut s = strategy(timer, Bus::default(), ActiveToggle::default(), vec![0.0]);
        let conn = StubEndpoint::new();
        let err = ConnectError::Refused {
            reason: "busy".into(),
        };

        s.on_connect_attempt(&conn);
        s.on_connect_attempt(&conn);
        assert_eq!(s.attempts_since_last_success(), 2);

        s.on_connect_attempt_failure(&conn, &err);
        s.on_connection_closed(&conn);
        assert_eq!(s.attempts_since_last_success(), 2);
    }

    #[test]
    fn open_resets_delay_and_counter() {
        let timer = Arc::new(RecordingTimer::default());
        let mut s = strategy(timer, Bus::default(), ActiveToggle::default(), vec![0.0]);
        let conn = StubEndpoint::new();

        s.on_connect_attempt(&conn);
        s.on_connection_closed(&conn);
        s.on_connection_closed(&conn);
        assert_eq!(s.current_delay(), Duration::from_secs(4));

        s.on_connection_open(&conn);
        assert_eq!(s.current_delay(), Duration::from_secs(1));
        assert_eq!(s.attempts_since_last_success(), 0);
    }

    #[test]
    fn closure_grows_delay_deterministically() {
        let timer = Arc::new(RecordingTimer::default());
        let mut s = strategy(
            timer.clone(),
            Bus::default(),
            ActiveToggle::default(),
            vec![0.0, 0.0, 1.0, 1.0, 1.0],
        );
        let conn = StubEndpoint::new();

        for _ in 0..5 {
            s.on_connection_closed(&conn);
        }

        // 1 → 2 → 4 with zero draws, then ×3 per closure: 12, 36→30 (capped), 30.
        let scheduled = timer.scheduled.lock().unwrap().clone();
        assert_eq!(
            scheduled,
            vec![
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(12),
                Duration::from_secs(30),
                Duration::from_secs(30),
            ]
        );
        assert_eq!(conn.fired.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn delay_stays_within_policy_bounds() {
        let timer = Arc::new(RecordingTimer::default());
        let bus = Bus::default();
        let policy = BackoffPolicy::default();
        let mut s = SimpleReconnectStrategy::with_jitter_source(
            policy,
            timer,
            bus,
            ActiveToggle::default(),
            Box::new(RandomJitter::seeded(99)),
        );
        let conn = StubEndpoint::new();

        for _ in 0..40 {
            s.on_connection_closed(&conn);
            assert!(s.current_delay() >= policy.initial);
            assert!(s.current_delay() <= policy.max);
        }
    }

    #[test]
    fn inactive_toggle_suppresses_scheduling() {
        let timer = Arc::new(RecordingTimer::default());
        let toggle = ActiveToggle::default();
        let mut s = strategy(timer.clone(), Bus::default(), toggle.clone(), vec![0.0]);
        let conn = StubEndpoint::new();

        toggle.set_active(false);
        s.on_connection_closed(&conn);

        assert!(timer.scheduled.lock().unwrap().is_empty());
        assert_eq!(s.current_delay(), Duration::from_secs(1));
        assert_eq!(conn.fired.load(Ordering::Relaxed), 0);

        toggle.set_active(true);
        s.on_connection_closed(&conn);
        assert_eq!(timer.scheduled.lock().unwrap().len(), 1);
    }

    #[test]
    fn toggle_is_shared_across_strategy_instances() {
        let timer = Arc::new(RecordingTimer::default());
        let toggle = ActiveToggle::default();
        let mut a = strategy(timer.clone(), Bus::default(), toggle.clone(), vec![0.0]);
        let mut b = strategy(timer.clone(), Bus::default(), toggle.clone(), vec![0.0]);
        let conn = StubEndpoint::new();

        // Disabling through one instance silences the other.
        a.set_active(false);
        b.on_connection_closed(&conn);
        assert!(timer.scheduled.lock().unwrap().is_empty());

        b.set_active(true);
        a.on_connection_closed(&conn);
        assert_eq!(timer.scheduled.lock().unwrap().len(), 1);
    }

    #[test]
    fn failure_and_schedule_reports_reach_the_bus() {
        let timer = Arc::new(RecordingTimer::default());
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();
        let mut s = strategy(timer, bus, ActiveToggle::default(), vec![0.0]);
        let conn = StubEndpoint::new();
        let err = ConnectError::Lost {
            reason: "peer went away".into(),
        };

        s.on_connect_attempt(&conn);
        s.on_connect_attempt_failure(&conn, &err);
        s.on_connection_closed(&conn);

        let failed = rx.try_recv().expect("failure report");
        assert_eq!(failed.kind, EventKind::AttemptFailed);
        assert_eq!(failed.attempt, Some(1));
        assert_eq!(failed.endpoint.as_deref(), Some("amqp://guest@localhost:5672"));
        assert!(failed.reason.as_deref().unwrap().contains("peer went away"));

        let scheduled = rx.try_recv().expect("schedule report");
        assert_eq!(scheduled.kind, EventKind::RetryScheduled);
        assert_eq!(scheduled.delay_ms, Some(2000));
        assert_eq!(scheduled.attempt, Some(1));
    }

    #[test]
    fn transport_hooks_leave_state_untouched() {
        let timer = Arc::new(RecordingTimer::default());
        let mut s = strategy(timer.clone(), Bus::default(), ActiveToggle::default(), vec![0.0]);
        let conn = StubEndpoint::new();

        s.on_transport_connected(&conn);
        s.on_transport_disconnected(&conn);

        assert_eq!(s.current_delay(), Duration::from_secs(1));
        assert_eq!(s.attempts_since_last_success(), 0);
        assert!(timer.scheduled.lock().unwrap().is_empty());
    }
}
