//! # Uniform draw source feeding the backoff jitter term.
//!
//! [`JitterSource`] abstracts where the random sample in the backoff formula
//! comes from, so tests can assert exact delay sequences instead of only
//! bounds. [`RandomJitter`] is the production implementation, either seeded
//! from the OS or from a caller-provided seed for reproducible runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)` for the backoff jitter term.
///
/// Implementations take `&mut self` since drawing advances generator state.
/// The strategies in this crate call [`draw`](JitterSource::draw) exactly
/// once per scheduled retry.
pub trait JitterSource: Send {
    /// Returns the next uniform sample in `[0, 1)`.
    fn draw(&mut self) -> f64;
}

/// RNG-backed jitter source.
///
/// ## Example
/// ```rust
/// use redial::{JitterSource, RandomJitter};
///
/// let mut a = RandomJitter::seeded(11);
/// let mut b = RandomJitter::seeded(11);
/// assert_eq!(a.draw(), b.draw());
///
/// let d = a.draw();
/// assert!((0.0..1.0).contains(&d));
/// ```
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    /// Creates a source seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministic source from an explicit seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for RandomJitter {
    fn draw(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut jitter = RandomJitter::seeded(3);
        for _ in 0..1000 {
            let d = jitter.draw();
            assert!((0.0..1.0).contains(&d), "draw {d} outside [0, 1)");
        }
    }

    #[test]
    fn os_seeded_source_produces_samples() {
        let mut jitter = RandomJitter::from_os_rng();
        let d = jitter.draw();
        assert!((0.0..1.0).contains(&d));
    }
}
