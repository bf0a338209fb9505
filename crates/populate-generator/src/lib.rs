//! Synthetic field value generator for wp-populate.
//!
//! This crate provides the `FakeGenerator` which produces plausible values for
//! every field the seeder writes (words, sentences, names, emails, URLs, IP
//! addresses, timestamps) and makes the randomized association choices
//! (picking tags, a category, an author, a comment count).
//!
//! # Architecture
//!
//! ```text
//!   seed (optional)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  FakeGenerator  │
//! │                 │
//! │  - seed         │
//! │  - rng (StdRng) │
//! └────────┬────────┘
//!          │
//!          ▼
//!   String / u32 / Vec<T>
//! ```
//!
//! # Example
//!
//! ```rust
//! use populate_generator::FakeGenerator;
//!
//! let mut generator = FakeGenerator::new(42);
//! let title = generator.sentence();
//! let body = generator.paragraphs(5);
//! let tags = generator.sample_distinct(&[10u64, 11, 12, 13], 3).unwrap();
//! assert!(!title.is_empty() && !body.is_empty());
//! assert_eq!(tags.len(), 3);
//! ```
//!
//! # Generators
//!
//! - `text` - words, sentences, paragraphs, country names
//! - `person` - full/first/last names, usernames, passwords, emails
//! - `internet` - URLs, IPv4 addresses, user-agent strings
//! - `timestamp` - timestamps inside the past-year window
//! - `numeric` - inclusive integer ranges
//! - `sample` - uniform choice and sampling without replacement
//! - `pattern` - `{id}` placeholder expansion for URL templates

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{FakeGenerator, GeneratorError};
pub use generators::pattern::expand_pattern;
pub use generators::timestamp::STORAGE_FORMAT;
