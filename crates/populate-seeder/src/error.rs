//! Error types for the seeder.

use content_store::StoreError;
use populate_generator::GeneratorError;
use thiserror::Error;

/// Errors that abort a seeding operation.
///
/// Entities created before the error remain in the store.
#[derive(Error, Debug)]
pub enum SeederError {
    /// A create or query call against the content store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Not enough related entities exist to build an association.
    #[error("Insufficient {kind}: need {needed}, only {available} available")]
    InsufficientRelated {
        kind: &'static str,
        needed: usize,
        available: usize,
    },
}

impl SeederError {
    /// Attach the related entity kind to a generator sampling failure.
    pub(crate) fn related(kind: &'static str, err: GeneratorError) -> Self {
        match err {
            GeneratorError::InsufficientCandidates { needed, available } => {
                SeederError::InsufficientRelated {
                    kind,
                    needed,
                    available,
                }
            }
        }
    }
}
