//! Production clock and randomness for order identifiers.
//!
//! The core only sees the `Clock` and `RandomSource` traits; these are the
//! implementations wired in by `main`.

use chrono::Utc;
use configurator_core::{Clock, RandomSource};
use rand::Rng;

/// Reads the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn number_between(&self, min: u16, max: u16) -> u16 {
        rand::rng().random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.unix_seconds() > 1_577_836_800);
    }

    #[test]
    fn test_thread_random_stays_in_range() {
        for _ in 0..1000 {
            let n = ThreadRandom.number_between(1000, 9999);
            assert!((1000..=9999).contains(&n));
        }
        assert_eq!(ThreadRandom.number_between(7, 7), 7);
    }
}
