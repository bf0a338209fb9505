//! Trait definitions for content persistence and media sideloading.

use crate::error::StoreError;
use crate::types::{EntityId, NewComment, NewPost, NewUser, Role, Taxonomy, Term, User};

/// Persistence API of the host content platform.
///
/// Every call is awaited in sequence by the seeder; implementations must offer
/// read-your-writes visibility so a query issued after a create sees the new
/// entity.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    /// Create a term in the given taxonomy, returning its id.
    async fn create_term(&self, taxonomy: Taxonomy, name: &str) -> Result<EntityId, StoreError>;

    /// Create a user account, returning its id.
    async fn create_user(&self, user: &NewUser) -> Result<EntityId, StoreError>;

    /// Create a post or page, returning its id.
    async fn create_post(&self, post: &NewPost) -> Result<EntityId, StoreError>;

    /// Create a comment on an existing post, returning its id.
    async fn create_comment(&self, comment: &NewComment) -> Result<EntityId, StoreError>;

    /// Replace the terms of `taxonomy` attached to a post.
    async fn set_post_terms(
        &self,
        post: EntityId,
        taxonomy: Taxonomy,
        terms: &[EntityId],
    ) -> Result<(), StoreError>;

    /// Designate an attachment as the post's featured image.
    async fn set_post_thumbnail(
        &self,
        post: EntityId,
        attachment: EntityId,
    ) -> Result<(), StoreError>;

    /// All terms of a taxonomy.
    async fn query_terms(&self, taxonomy: Taxonomy) -> Result<Vec<Term>, StoreError>;

    /// All users holding a role.
    async fn query_users(&self, role: Role) -> Result<Vec<User>, StoreError>;
}

/// Fetches a remote file and stores it as a managed media attachment.
#[async_trait::async_trait]
pub trait MediaSideloader: Send + Sync {
    /// Download `url` and store it, returning the attachment id.
    async fn sideload(&self, url: &str) -> Result<EntityId, StoreError>;
}
