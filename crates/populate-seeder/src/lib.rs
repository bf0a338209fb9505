//! Seeding operations for wp-populate.
//!
//! The `Seeder` creates categories, tags, authors, posts and pages through a
//! [`content_store::ContentStore`], drawing field values from a
//! [`populate_generator::FakeGenerator`].
//!
//! Before a post batch that associates tags, categories or authors, the seeder
//! checks how many of each already exist and, below [`BACKFILL_THRESHOLD`],
//! creates [`DEFAULT_COUNT`] more by calling its own creation operations.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use content_store::MemoryStore;
//! use populate_generator::FakeGenerator;
//! use populate_seeder::{PostOptions, Seeder};
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut seeder = Seeder::new(store.clone(), store.clone(), FakeGenerator::new(42));
//! seeder.create_posts(&PostOptions { tags: true, ..PostOptions::default() }).await?;
//! println!("{}", seeder.metrics().summary());
//! ```

pub mod args;
pub mod error;
pub mod metrics;
pub mod options;
pub mod progress;
pub mod seeder;

pub use args::{CountArgs, PostArgs};
pub use error::SeederError;
pub use metrics::PopulateMetrics;
pub use options::{EffectiveFlags, PostOptions, DEFAULT_COUNT};
pub use progress::{Progress, ProgressMode};
pub use seeder::{
    Seeder, BACKFILL_THRESHOLD, COMMENTS_PER_POST, DEFAULT_IMAGE_URL_TEMPLATE, IMAGE_IDS,
    TAGS_PER_POST,
};
