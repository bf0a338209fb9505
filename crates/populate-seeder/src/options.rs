//! Typed options for the post operation.

/// Number of entities each operation creates when no count is given.
pub const DEFAULT_COUNT: u32 = 5;

/// Options of a post batch.
///
/// `all` forces every association on regardless of the individual flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostOptions {
    pub count: u32,
    pub tags: bool,
    pub category: bool,
    pub author: bool,
    pub comment: bool,
    pub image: bool,
    pub all: bool,
}

impl Default for PostOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            tags: false,
            category: false,
            author: false,
            comment: false,
            image: false,
            all: false,
        }
    }
}

impl PostOptions {
    /// `count` posts with every association enabled through `all`.
    pub fn everything(count: u32) -> Self {
        Self {
            count,
            all: true,
            ..Self::default()
        }
    }

    /// Resolve each association as `flag || all`.
    pub fn effective(&self) -> EffectiveFlags {
        EffectiveFlags {
            tags: self.tags || self.all,
            category: self.category || self.all,
            author: self.author || self.all,
            comment: self.comment || self.all,
            image: self.image || self.all,
        }
    }
}

/// Associations that are actually applied to each post of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectiveFlags {
    pub tags: bool,
    pub category: bool,
    pub author: bool,
    pub comment: bool,
    pub image: bool,
}
