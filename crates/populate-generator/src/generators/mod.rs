//! Individual value generators for each semantic field kind.
//!
//! Every function takes the caller's RNG so that a seeded generator yields
//! the same values across runs.

pub mod internet;
pub mod numeric;
pub mod pattern;
pub mod person;
pub mod sample;
pub mod text;
pub mod timestamp;
