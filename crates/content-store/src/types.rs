//! Entity types exchanged with the content store.

use serde::Serialize;
use std::fmt;

/// Host-assigned identifier of any stored entity.
pub type EntityId = u64;

/// Author used when no generated author is attached (the site's first administrator).
pub const DEFAULT_AUTHOR_ID: EntityId = 1;

/// Classification system a term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Taxonomy {
    Category,
    Tag,
}

impl Taxonomy {
    /// Host taxonomy slug.
    pub fn slug(self) -> &'static str {
        match self {
            Taxonomy::Category => "category",
            Taxonomy::Tag => "post_tag",
        }
    }

    /// Plural label used in progress and log messages.
    pub fn plural(self) -> &'static str {
        match self {
            Taxonomy::Category => "categories",
            Taxonomy::Tag => "tags",
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Author,
}

impl Role {
    pub fn slug(self) -> &'static str {
        match self {
            Role::Author => "author",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostType {
    Post,
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Publish,
}

/// A term returned by a taxonomy query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub id: EntityId,
    pub name: String,
}

/// A user returned by a role query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub username: String,
}

/// Fields of a user account to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Fields of a post or page to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub post_type: PostType,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub author: EntityId,
    /// Creation time as `YYYY-MM-DD HH:MM:SS` (UTC)
    pub date: String,
}

/// Fields of a comment to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post: EntityId,
    pub author_name: String,
    pub author_email: String,
    pub author_url: String,
    pub author_ip: String,
    pub author_user_agent: String,
    pub content: String,
    /// Creation time as `YYYY-MM-DD HH:MM:SS` (UTC)
    pub date: String,
    pub approved: bool,
}
