//! # Backoff policy for reconnect delays.
//!
//! [`BackoffPolicy`] controls how the delay between reconnect attempts grows
//! each time a connection closes. It is parameterized by:
//! - [`BackoffPolicy::initial`] the delay a freshly opened connection falls
//!   back to;
//! - [`BackoffPolicy::multiplier`] the multiplicative growth factor applied
//!   on every closure;
//! - [`BackoffPolicy::max`] the maximum delay cap;
//! - [`BackoffPolicy::jitter`] the fraction of randomization mixed into each
//!   step.
//!
//! The next delay is derived from the **previous** delay, not the attempt
//! number: `next = current × ((draw × jitter) + 1) × multiplier`, clamped to
//! `max`, where `draw` is a uniform sample in `[0, 1)`. Feeding the previous
//! delay back in means the growth applies on every closure — a connection
//! that opens, lives briefly, and closes again keeps backing off, which
//! protects the remote peer from rapid reconnect storms across repeated
//! short-lived sessions.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use redial::BackoffPolicy;
//!
//! let backoff = BackoffPolicy::default(); // 1s, ×2.0, cap 30s, jitter 0.5
//!
//! // With a zero draw the jitter term vanishes: 1s → 2s → 4s.
//! let d1 = backoff.next_delay(backoff.initial, 0.0);
//! let d2 = backoff.next_delay(d1, 0.0);
//! assert_eq!(d1, Duration::from_secs(2));
//! assert_eq!(d2, Duration::from_secs(4));
//! ```

use std::time::Duration;

/// Reconnect backoff policy.
///
/// Encapsulates the parameters that determine how reconnect delays evolve
/// across closures. Immutable after construction; the evolving delay itself
/// lives in the strategy that owns the policy.
#[derive(Clone, Copy, Debug)]
pub struct BackoffPolicy {
    /// Delay to start from, and to return to after a successful open.
    pub initial: Duration,
    /// Multiplicative growth factor applied on every closure (`> 1.0`).
    pub multiplier: f64,
    /// Maximum delay cap.
    pub max: Duration,
    /// Jitter fraction (`>= 0.0`, typically `0.0..=1.0`) scaling the random
    /// perturbation mixed into each step.
    pub jitter: f64,
}

impl Default for BackoffPolicy {
    /// Returns a policy with:
    /// - `initial = 1s`;
    /// - `multiplier = 2.0`;
    /// - `max = 30s`;
    /// - `jitter = 0.5`.
    fn default() -> Self {
        Self {
            initial: Duration::from_secs(1),
            multiplier: 2.0,
            max: Duration::from_secs(30),
            jitter: 0.5,
        }
    }
}

impl BackoffPolicy {
    /// Computes the delay that follows `current`, given a uniform `draw` in
    /// `[0, 1)`.
    ///
    /// The raw value is `current × ((draw × jitter) + 1) × multiplier`,
    /// clamped to [`BackoffPolicy::max`]. Given the same draw sequence the
    /// output sequence is exactly reproducible.
    ///
    /// # Notes
    /// - With `multiplier > 1.0` and a non-negative draw the result never
    ///   shrinks, so delays stay within `[initial, max]` once seeded from
    ///   `initial`.
    /// - Non-finite or negative intermediates clamp to `max`.
    pub fn next_delay(&self, current: Duration, draw: f64) -> Duration {
        let max_secs = self.max.as_secs_f64();
        let next_secs = current.as_secs_f64() * ((draw * self.jitter) + 1.0) * self.multiplier;

        if !next_secs.is_finite() || next_secs < 0.0 || next_secs > max_secs {
            self.max
        } else {
            Duration::from_secs_f64(next_secs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{JitterSource, RandomJitter};

    #[test]
    fn zero_draw_doubles_each_closure() {
        let policy = BackoffPolicy::default();

        let d1 = policy.next_delay(policy.initial, 0.0);
        let d2 = policy.next_delay(d1, 0.0);
        let d3 = policy.next_delay(d2, 0.0);

        assert_eq!(d1, Duration::from_secs(2));
        assert_eq!(d2, Duration::from_secs(4));
        assert_eq!(d3, Duration::from_secs(8));
    }

    #[test]
    fn full_draw_triples_and_caps() {
        let policy = BackoffPolicy::default();

        // 4.0 × 1.5 × 2.0 = 12.0, then 12.0 × 3.0 = 36.0 → capped at 30.0.
        let d1 = policy.next_delay(Duration::from_secs(4), 1.0);
        let d2 = policy.next_delay(d1, 1.0);

        assert_eq!(d1, Duration::from_secs(12));
        assert_eq!(d2, Duration::from_secs(30));
    }

    #[test]
    fn capped_delay_stays_at_max() {
        let policy = BackoffPolicy::default();
        let capped = policy.next_delay(policy.max, 1.0);
        assert_eq!(capped, policy.max);
    }

    #[test]
    fn random_draws_respect_bounds() {
        let policy = BackoffPolicy::default();
        let mut jitter = RandomJitter::seeded(7);

        let mut current = policy.initial;
        for _ in 0..50 {
            current = policy.next_delay(current, jitter.draw());
            assert!(
                current >= policy.initial && current <= policy.max,
                "delay {:?} escaped [{:?}, {:?}]",
                current,
                policy.initial,
                policy.max
            );
        }
    }

    #[test]
    fn seeded_draws_reproduce_the_same_sequence() {
        let policy = BackoffPolicy::default();

        let run = |seed: u64| {
            let mut jitter = RandomJitter::seeded(seed);
            let mut current = policy.initial;
            (0..10)
                .map(|_| {
                    current = policy.next_delay(current, jitter.draw());
                    current
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn non_finite_intermediate_clamps_to_max() {
        let policy = BackoffPolicy {
            initial: Duration::from_secs(1),
            multiplier: f64::MAX,
            max: Duration::from_secs(10),
            jitter: 0.5,
        };
        assert_eq!(
            policy.next_delay(Duration::from_secs(5), 1.0),
            Duration::from_secs(10)
        );
    }
}
