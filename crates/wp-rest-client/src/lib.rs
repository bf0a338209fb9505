//! WordPress REST API client for wp-populate.
//!
//! `WpRestClient` implements both `ContentStore` and `MediaSideloader` against
//! the core `wp/v2` REST namespace, authenticating with HTTP basic auth and an
//! application password.
//!
//! # Example
//!
//! ```ignore
//! use content_store::{ContentStore, Taxonomy};
//! use wp_rest_client::{ClientConfig, WpRestClient};
//!
//! let client = WpRestClient::new(&ClientConfig {
//!     endpoint: "http://localhost:8080".to_string(),
//!     username: "admin".to_string(),
//!     application_password: "abcd efgh ijkl mnop".to_string(),
//!     timeout: std::time::Duration::from_secs(30),
//! })?;
//! let id = client.create_term(Taxonomy::Category, "news").await?;
//! ```

mod client;
mod media;

pub use client::{ClientConfig, WpRestClient, API_PREFIX, PER_PAGE};
