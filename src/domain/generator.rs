//! Order number generation
//!
//! Numbers are synthesized from the wall clock and a random source: the low
//! five decimal digits of the Unix timestamp plus two random digits, behind
//! the constant prefix. Uniqueness is probabilistic only — the timestamp
//! window cycles roughly every 28 hours and each second-bucket has just 100
//! random suffixes, so concurrent generation can collide. Callers that care
//! (the migration pass) space their writes out instead of checking.

use crate::domain::order_number::{OrderNumber, PREFIX};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock abstraction so tests can pin the timestamp
pub trait Clock {
    /// Whole seconds since the Unix epoch
    fn unix_seconds(&self) -> u64;
}

/// The real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }
}

/// Produces order numbers from an injected clock and random source
#[derive(Debug)]
pub struct OrderNumberGenerator<C = SystemClock, R = StdRng> {
    clock: C,
    rng: R,
}

impl OrderNumberGenerator {
    /// Generator backed by the system clock and an entropy-seeded RNG
    pub fn from_entropy() -> Self {
        Self {
            clock: SystemClock,
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for OrderNumberGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<C: Clock, R: Rng> OrderNumberGenerator<C, R> {
    pub fn new(clock: C, rng: R) -> Self {
        Self { clock, rng }
    }

    /// Synthesize a fresh order number
    ///
    /// Cannot fail given a working clock and RNG, and the output always
    /// passes [`OrderNumber`] validation. It does not consult the store and
    /// does not guard against collisions.
    pub fn generate(&mut self) -> OrderNumber {
        // Low five digits of the seconds timestamp, zero-padded so the
        // suffix is always exactly seven digits.
        let window = self.clock.unix_seconds() % 100_000;
        let salt = self.rng.gen_range(0..100u32);

        let candidate = format!("{PREFIX}{window:05}{salt:02}");
        OrderNumber::try_new(candidate)
            .expect("prefix plus seven zero-padded digits always passes validation")
    }
}
