//! Content store abstractions for wp-populate.
//!
//! Provides the `ContentStore` and `MediaSideloader` traits the seeder writes
//! through, the entity types they exchange, the media type allow-list used when
//! sideloading images, and `MemoryStore`, an in-process implementation used for
//! dry runs and tests.

mod error;
mod memory;
pub mod mime;
mod traits;
mod types;

pub use error::StoreError;
pub use memory::{
    MemoryStore, StoredAttachment, StoredComment, StoredPost, StoredTerm, StoredUser,
};
pub use traits::{ContentStore, MediaSideloader};
pub use types::{
    EntityId, NewComment, NewPost, NewUser, PostStatus, PostType, Role, Taxonomy, Term, User,
    DEFAULT_AUTHOR_ID,
};
