//! CLI argument definitions for the seeding subcommands.

use crate::options::{PostOptions, DEFAULT_COUNT};
use clap::{ArgAction, Args};

/// Arguments of the category, tag, author and page subcommands.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct CountArgs {
    /// Number of entities to create
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: u32,
}

impl Default for CountArgs {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
        }
    }
}

/// Arguments of the post subcommand.
///
/// Every flag accepts `--flag`, `--flag=true` and `--flag=false`.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct PostArgs {
    /// Number of posts to create
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    /// Attach 3 random tags to each post
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_value_t = false, default_missing_value = "true")]
    pub tags: bool,

    /// Attach 1 random category to each post
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_value_t = false, default_missing_value = "true")]
    pub category: bool,

    /// Assign a random author to each post
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_value_t = false, default_missing_value = "true")]
    pub author: bool,

    /// Create 0 to 10 approved comments on each post
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_value_t = false, default_missing_value = "true")]
    pub comment: bool,

    /// Sideload a random photo as each post's featured image
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_value_t = false, default_missing_value = "true")]
    pub image: bool,

    /// Enable every association above
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, default_value_t = false, default_missing_value = "true")]
    pub all: bool,
}

impl From<&PostArgs> for PostOptions {
    fn from(args: &PostArgs) -> Self {
        Self {
            count: args.count,
            tags: args.tags,
            category: args.category,
            author: args.author,
            comment: args.comment,
            image: args.image,
            all: args.all,
        }
    }
}
