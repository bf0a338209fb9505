//! Main generator producing field values and association choices.

use crate::generators::{internet, numeric, person, sample, text, timestamp};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Fewer candidates than the number of distinct picks requested
    #[error("Insufficient candidates: need {needed}, only {available} available")]
    InsufficientCandidates { needed: usize, available: usize },
}

/// Generator of synthetic content values.
///
/// Built with a seed, the generator yields the same sequence of values for
/// the same sequence of calls. Timestamps are the exception: they are drawn
/// relative to the wall clock unless [`FakeGenerator::timestamp_at`] is used.
pub struct FakeGenerator {
    /// Seed the RNG was built from
    seed: u64,
    rng: StdRng,
}

impl FakeGenerator {
    /// Create a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator with a seed drawn from the operating system.
    ///
    /// The drawn seed is kept, so [`FakeGenerator::seed`] can reproduce the run.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy().gen())
    }

    /// Seed the generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A single lowercase word.
    pub fn word(&mut self) -> String {
        text::generate_word(&mut self.rng)
    }

    /// A short personal name (a first name).
    pub fn short_name(&mut self) -> String {
        person::generate_first_name(&mut self.rng)
    }

    pub fn sentence(&mut self) -> String {
        text::generate_sentence(&mut self.rng)
    }

    /// `count` paragraphs joined by blank lines.
    pub fn paragraphs(&mut self, count: usize) -> String {
        text::generate_paragraphs(&mut self.rng, count)
    }

    pub fn full_name(&mut self) -> String {
        person::generate_full_name(&mut self.rng)
    }

    pub fn first_name(&mut self) -> String {
        person::generate_first_name(&mut self.rng)
    }

    pub fn last_name(&mut self) -> String {
        person::generate_last_name(&mut self.rng)
    }

    pub fn username(&mut self) -> String {
        person::generate_username(&mut self.rng)
    }

    pub fn password(&mut self) -> String {
        person::generate_password(&mut self.rng)
    }

    pub fn email(&mut self) -> String {
        person::generate_email(&mut self.rng)
    }

    pub fn url(&mut self) -> String {
        internet::generate_url(&mut self.rng)
    }

    pub fn ipv4(&mut self) -> String {
        internet::generate_ipv4(&mut self.rng)
    }

    pub fn user_agent(&mut self) -> String {
        internet::generate_user_agent(&mut self.rng)
    }

    pub fn country(&mut self) -> String {
        text::generate_country(&mut self.rng)
    }

    /// A storage-formatted timestamp within the year before now.
    pub fn timestamp(&mut self) -> String {
        self.timestamp_at(Utc::now())
    }

    /// A storage-formatted timestamp within the year before `now`.
    pub fn timestamp_at(&mut self, now: DateTime<Utc>) -> String {
        let dt = timestamp::generate_past_year(&mut self.rng, now);
        timestamp::format_for_storage(&dt)
    }

    /// A uniformly distributed integer in `range`.
    pub fn int_in_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        numeric::generate_int_range(&mut self.rng, range)
    }

    /// One element chosen uniformly, `None` for an empty pool.
    pub fn pick_one<'a, T>(&mut self, pool: &'a [T]) -> Option<&'a T> {
        sample::pick_one(&mut self.rng, pool)
    }

    /// `k` distinct elements chosen uniformly without replacement.
    pub fn sample_distinct<T: Clone>(
        &mut self,
        pool: &[T],
        k: usize,
    ) -> Result<Vec<T>, GeneratorError> {
        sample::sample_distinct(&mut self.rng, pool, k)
    }
}

impl Default for FakeGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
