//! # Order Identifiers
//!
//! Builds the opaque identifier returned for an accepted order.
//!
//! ## Format
//! ```text
//!   1718900000   ADFIK   4821
//!   ──────────   ─────   ────
//!   unix secs    sorted  random suffix
//!                codes   (1000..=9999)
//! ```
//!
//! Uniqueness is probabilistic: two orders for the same components in the
//! same second collide when they draw the same suffix.
//!
//! The core never reads the system clock or an OS random source itself.
//! Both arrive through [`Clock`] and [`RandomSource`], so tests can pin them.

use std::sync::Arc;

/// Smallest order identifier suffix.
pub const SUFFIX_MIN: u16 = 1000;

/// Largest order identifier suffix.
pub const SUFFIX_MAX: u16 = 9999;

/// Wall-clock time source.
pub trait Clock: Send + Sync {
    /// Whole seconds since the Unix epoch.
    fn unix_seconds(&self) -> i64;
}

/// Source of the random identifier suffix.
pub trait RandomSource: Send + Sync {
    /// A number in `min..=max`.
    fn number_between(&self, min: u16, max: u16) -> u16;
}

/// Combines a clock and a random source into order identifiers.
#[derive(Clone)]
pub struct OrderIdGenerator {
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl OrderIdGenerator {
    pub fn new(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        OrderIdGenerator { clock, random }
    }

    /// Generates an identifier for an order made of `sorted_codes`.
    ///
    /// Callers pass codes already sorted; they are concatenated verbatim.
    pub fn generate(&self, sorted_codes: &[String]) -> String {
        let timestamp = self.clock.unix_seconds();
        let suffix = self.random.number_between(SUFFIX_MIN, SUFFIX_MAX);
        format!("{}{}{}", timestamp, sorted_codes.concat(), suffix)
    }
}
