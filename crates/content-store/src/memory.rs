//! In-process content store.
//!
//! Backs `--dry-run` and the test suites. It keeps every created entity in
//! memory and exposes accessors so callers can inspect what was written.

use crate::error::StoreError;
use crate::mime::infer_extension;
use crate::traits::{ContentStore, MediaSideloader};
use crate::types::{
    EntityId, NewComment, NewPost, NewUser, PostType, Role, Taxonomy, Term, User,
    DEFAULT_AUTHOR_ID,
};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTerm {
    pub id: EntityId,
    pub taxonomy: Taxonomy,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub id: EntityId,
    pub user: NewUser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPost {
    pub id: EntityId,
    pub post: NewPost,
    pub categories: Vec<EntityId>,
    pub tags: Vec<EntityId>,
    pub thumbnail: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredComment {
    pub id: EntityId,
    pub comment: NewComment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAttachment {
    pub id: EntityId,
    pub source_url: String,
    pub extension: &'static str,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: EntityId,
    terms: Vec<StoredTerm>,
    users: Vec<StoredUser>,
    posts: Vec<StoredPost>,
    comments: Vec<StoredComment>,
    attachments: Vec<StoredAttachment>,
}

impl MemoryState {
    fn next_id(&mut self) -> EntityId {
        self.last_id += 1;
        self.last_id
    }

    fn post_mut(&mut self, id: EntityId) -> Result<&mut StoredPost, StoreError> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound { kind: "post", id })
    }
}

/// Content store held entirely in memory.
///
/// Ids are allocated from a single counter shared by all entity kinds and
/// start above [`DEFAULT_AUTHOR_ID`], which stands for the pre-existing site
/// administrator.
#[derive(Debug)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    /// Reject terms and usernames that already exist, as the host does
    unique_names: bool,
    /// Fail every sideload call
    failing_sideload: bool,
    /// Fail `create_post` once this many posts and pages exist
    post_limit: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                last_id: DEFAULT_AUTHOR_ID,
                ..MemoryState::default()
            }),
            unique_names: false,
            failing_sideload: false,
            post_limit: None,
        }
    }

    /// Reject duplicate term names per taxonomy and duplicate usernames.
    pub fn with_unique_names(mut self) -> Self {
        self.unique_names = true;
        self
    }

    /// Make every sideload fail with a transport error.
    pub fn with_failing_sideload(mut self) -> Self {
        self.failing_sideload = true;
        self
    }

    /// Make `create_post` fail once `limit` posts and pages have been stored.
    pub fn with_post_limit(mut self, limit: usize) -> Self {
        self.post_limit = Some(limit);
        self
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn terms(&self, taxonomy: Taxonomy) -> Vec<StoredTerm> {
        self.state()
            .terms
            .iter()
            .filter(|t| t.taxonomy == taxonomy)
            .cloned()
            .collect()
    }

    pub fn users(&self) -> Vec<StoredUser> {
        self.state().users.clone()
    }

    /// Stored entries of post type `post`.
    pub fn posts(&self) -> Vec<StoredPost> {
        self.of_type(PostType::Post)
    }

    /// Stored entries of post type `page`.
    pub fn pages(&self) -> Vec<StoredPost> {
        self.of_type(PostType::Page)
    }

    fn of_type(&self, post_type: PostType) -> Vec<StoredPost> {
        self.state()
            .posts
            .iter()
            .filter(|p| p.post.post_type == post_type)
            .cloned()
            .collect()
    }

    pub fn comments(&self) -> Vec<StoredComment> {
        self.state().comments.clone()
    }

    pub fn comments_for(&self, post: EntityId) -> Vec<StoredComment> {
        self.state()
            .comments
            .iter()
            .filter(|c| c.comment.post == post)
            .cloned()
            .collect()
    }

    pub fn attachments(&self) -> Vec<StoredAttachment> {
        self.state().attachments.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ContentStore for MemoryStore {
    async fn create_term(&self, taxonomy: Taxonomy, name: &str) -> Result<EntityId, StoreError> {
        let mut state = self.state();
        if self.unique_names
            && state
                .terms
                .iter()
                .any(|t| t.taxonomy == taxonomy && t.name == name)
        {
            return Err(StoreError::Duplicate {
                kind: "term",
                name: name.to_string(),
            });
        }

        let id = state.next_id();
        state.terms.push(StoredTerm {
            id,
            taxonomy,
            name: name.to_string(),
        });
        debug!("Created {} term {} '{}'", taxonomy, id, name);
        Ok(id)
    }

    async fn create_user(&self, user: &NewUser) -> Result<EntityId, StoreError> {
        let mut state = self.state();
        if self.unique_names && state.users.iter().any(|u| u.user.username == user.username) {
            return Err(StoreError::Duplicate {
                kind: "user",
                name: user.username.clone(),
            });
        }

        let id = state.next_id();
        state.users.push(StoredUser {
            id,
            user: user.clone(),
        });
        Ok(id)
    }

    async fn create_post(&self, post: &NewPost) -> Result<EntityId, StoreError> {
        let mut state = self.state();
        if let Some(limit) = self.post_limit {
            if state.posts.len() >= limit {
                return Err(StoreError::Backend(format!(
                    "post limit of {limit} reached"
                )));
            }
        }

        let id = state.next_id();
        state.posts.push(StoredPost {
            id,
            post: post.clone(),
            categories: Vec::new(),
            tags: Vec::new(),
            thumbnail: None,
        });
        Ok(id)
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<EntityId, StoreError> {
        let mut state = self.state();
        state.post_mut(comment.post)?;

        let id = state.next_id();
        state.comments.push(StoredComment {
            id,
            comment: comment.clone(),
        });
        Ok(id)
    }

    async fn set_post_terms(
        &self,
        post: EntityId,
        taxonomy: Taxonomy,
        terms: &[EntityId],
    ) -> Result<(), StoreError> {
        let mut state = self.state();
        if let Some(&missing) = terms
            .iter()
            .find(|id| !state.terms.iter().any(|t| t.id == **id && t.taxonomy == taxonomy))
        {
            return Err(StoreError::NotFound {
                kind: "term",
                id: missing,
            });
        }

        let stored = state.post_mut(post)?;
        match taxonomy {
            Taxonomy::Category => stored.categories = terms.to_vec(),
            Taxonomy::Tag => stored.tags = terms.to_vec(),
        }
        Ok(())
    }

    async fn set_post_thumbnail(
        &self,
        post: EntityId,
        attachment: EntityId,
    ) -> Result<(), StoreError> {
        let mut state = self.state();
        if !state.attachments.iter().any(|a| a.id == attachment) {
            return Err(StoreError::NotFound {
                kind: "attachment",
                id: attachment,
            });
        }

        state.post_mut(post)?.thumbnail = Some(attachment);
        Ok(())
    }

    async fn query_terms(&self, taxonomy: Taxonomy) -> Result<Vec<Term>, StoreError> {
        Ok(self
            .terms(taxonomy)
            .into_iter()
            .map(|t| Term {
                id: t.id,
                name: t.name,
            })
            .collect())
    }

    async fn query_users(&self, role: Role) -> Result<Vec<User>, StoreError> {
        Ok(self
            .users()
            .into_iter()
            .filter(|u| u.user.role == role)
            .map(|u| User {
                id: u.id,
                username: u.user.username,
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl MediaSideloader for MemoryStore {
    async fn sideload(&self, url: &str) -> Result<EntityId, StoreError> {
        if self.failing_sideload {
            return Err(StoreError::Http(format!("failed to download {url}")));
        }

        let extension =
            infer_extension(url, None).ok_or_else(|| StoreError::UnsupportedMediaType {
                url: url.to_string(),
                content_type: "unknown".to_string(),
            })?;

        let mut state = self.state();
        let id = state.next_id();
        state.attachments.push(StoredAttachment {
            id,
            source_url: url.to_string(),
            extension,
        });
        Ok(id)
    }
}
