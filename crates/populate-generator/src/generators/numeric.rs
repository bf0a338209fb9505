//! Numeric value generators.

use rand::Rng;
use std::ops::RangeInclusive;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<u32>) -> u32 {
    if range.is_empty() {
        return *range.start();
    }
    rng.gen_range(range)
}
