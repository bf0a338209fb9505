//! Counters of what a seeding run created.

use std::time::Duration;

/// Metrics from a populate run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulateMetrics {
    pub categories_created: u64,
    pub tags_created: u64,
    pub authors_created: u64,
    pub posts_created: u64,
    pub pages_created: u64,
    pub comments_created: u64,
    pub thumbnails_attached: u64,
    /// Sideloads that failed, leaving the post without a thumbnail.
    pub thumbnails_failed: u64,
    /// Terms or users the store refused as already existing.
    pub duplicates_skipped: u64,
    pub total_duration: Duration,
}

impl PopulateMetrics {
    /// Total number of entities written.
    pub fn entities_created(&self) -> u64 {
        self.categories_created
            + self.tags_created
            + self.authors_created
            + self.posts_created
            + self.pages_created
            + self.comments_created
            + self.thumbnails_attached
    }

    /// Human-readable list of non-zero counters, e.g. `5 posts, 12 comments`.
    pub fn summary(&self) -> String {
        let counters = [
            (self.posts_created, "post", "posts"),
            (self.pages_created, "page", "pages"),
            (self.comments_created, "comment", "comments"),
            (self.categories_created, "category", "categories"),
            (self.tags_created, "tag", "tags"),
            (self.authors_created, "author", "authors"),
            (self.thumbnails_attached, "thumbnail", "thumbnails"),
        ];

        let mut parts: Vec<String> = counters
            .iter()
            .filter(|(n, _, _)| *n > 0)
            .map(|(n, one, many)| format!("{n} {}", if *n == 1 { one } else { many }))
            .collect();

        if parts.is_empty() {
            parts.push("nothing".to_string());
        }
        if self.thumbnails_failed > 0 {
            parts.push(format!("{} thumbnail(s) failed", self.thumbnails_failed));
        }
        if self.duplicates_skipped > 0 {
            parts.push(format!("{} duplicate(s) skipped", self.duplicates_skipped));
        }

        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let metrics = PopulateMetrics {
            posts_created: 5,
            comments_created: 1,
            tags_created: 5,
            ..Default::default()
        };

        assert_eq!(metrics.summary(), "5 posts, 1 comment, 5 tags");
        assert_eq!(metrics.entities_created(), 11);
    }

    #[test]
    fn test_summary_empty_and_failures() {
        assert_eq!(PopulateMetrics::default().summary(), "nothing");

        let metrics = PopulateMetrics {
            posts_created: 1,
            thumbnails_failed: 1,
            duplicates_skipped: 2,
            ..Default::default()
        };
        assert_eq!(
            metrics.summary(),
            "1 post, 1 thumbnail(s) failed, 2 duplicate(s) skipped"
        );
    }
}
