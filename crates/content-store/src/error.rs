//! Error types for content store operations.

use thiserror::Error;

/// Errors that can occur while talking to a content store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The host refused the entity because one with the same unique key exists.
    #[error("{kind} '{name}' already exists")]
    Duplicate { kind: &'static str, name: String },

    /// The host API answered with an error.
    #[error("API error ({status}) {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Transport-level failure (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(String),

    /// A response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A downloaded file has a media type outside the allow-list.
    #[error("Unsupported media type for '{url}': {content_type}")]
    UnsupportedMediaType { url: String, content_type: String },

    /// The referenced entity does not exist in the store.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u64 },

    /// Failure injected or reported by a store backend.
    #[error("Store error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Duplicate { .. })
    }
}
