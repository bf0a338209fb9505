//! Entity creation and dependency backfill.

use crate::error::SeederError;
use crate::metrics::PopulateMetrics;
use crate::options::{EffectiveFlags, PostOptions, DEFAULT_COUNT};
use crate::progress::{Progress, ProgressMode};
use content_store::{
    ContentStore, EntityId, MediaSideloader, NewComment, NewPost, NewUser, PostStatus, PostType,
    Role, StoreError, Taxonomy, DEFAULT_AUTHOR_ID,
};
use populate_generator::{expand_pattern, FakeGenerator};
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Minimum number of tags, categories and authors that must exist before a
/// post batch associates them. Fixed regardless of how many a post consumes.
pub const BACKFILL_THRESHOLD: usize = 3;

/// Distinct tags attached to every tagged post.
pub const TAGS_PER_POST: usize = 3;

/// Number of comments created per post, drawn uniformly.
pub const COMMENTS_PER_POST: RangeInclusive<u32> = 0..=10;

/// Ids substituted into the image URL template.
pub const IMAGE_IDS: RangeInclusive<u32> = 1..=10;

pub const DEFAULT_IMAGE_URL_TEMPLATE: &str = "https://picsum.photos/id/{id}/800/600.jpg";

const BODY_PARAGRAPHS: usize = 5;
const COMMENT_PARAGRAPHS: usize = 1;

/// Candidate ids collected once before a post batch.
#[derive(Debug, Default)]
struct RelatedCandidates {
    tags: Vec<EntityId>,
    categories: Vec<EntityId>,
    authors: Vec<EntityId>,
}

/// Creates synthetic entities through a content store.
pub struct Seeder {
    store: Arc<dyn ContentStore>,
    media: Arc<dyn MediaSideloader>,
    generator: FakeGenerator,
    progress: ProgressMode,
    image_url_template: String,
    metrics: PopulateMetrics,
}

impl Seeder {
    pub fn new(
        store: Arc<dyn ContentStore>,
        media: Arc<dyn MediaSideloader>,
        generator: FakeGenerator,
    ) -> Self {
        Self {
            store,
            media,
            generator,
            progress: ProgressMode::default(),
            image_url_template: DEFAULT_IMAGE_URL_TEMPLATE.to_string(),
            metrics: PopulateMetrics::default(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressMode) -> Self {
        self.progress = progress;
        self
    }

    /// URL template of featured images; `{id}` is replaced by a number in [`IMAGE_IDS`].
    pub fn with_image_url_template(mut self, template: impl Into<String>) -> Self {
        self.image_url_template = template.into();
        self
    }

    pub fn metrics(&self) -> &PopulateMetrics {
        &self.metrics
    }

    pub fn into_metrics(self) -> PopulateMetrics {
        self.metrics
    }

    /// Create `count` categories, returning the ids the store accepted.
    pub async fn create_categories(&mut self, count: u32) -> Result<Vec<EntityId>, SeederError> {
        self.create_terms(Taxonomy::Category, count).await
    }

    /// Create `count` tags, returning the ids the store accepted.
    pub async fn create_tags(&mut self, count: u32) -> Result<Vec<EntityId>, SeederError> {
        self.create_terms(Taxonomy::Tag, count).await
    }

    async fn create_terms(
        &mut self,
        taxonomy: Taxonomy,
        count: u32,
    ) -> Result<Vec<EntityId>, SeederError> {
        let label = format!("Generating {}", taxonomy.plural());
        let progress = Progress::start(self.progress, &label, u64::from(count));
        let mut created = Vec::new();

        for _ in 0..count {
            let name = self.generator.word();
            match self.store.create_term(taxonomy, &name).await {
                Ok(id) => {
                    match taxonomy {
                        Taxonomy::Category => self.metrics.categories_created += 1,
                        Taxonomy::Tag => self.metrics.tags_created += 1,
                    }
                    created.push(id);
                }
                Err(err) => self.skip_duplicate(err)?,
            }
            progress.tick();
        }

        progress.finish();
        info!("Created {} {}", created.len(), taxonomy.plural());
        Ok(created)
    }

    /// Create `count` users with the author role.
    pub async fn create_authors(&mut self, count: u32) -> Result<Vec<EntityId>, SeederError> {
        let progress = Progress::start(self.progress, "Generating authors", u64::from(count));
        let mut created = Vec::new();

        for _ in 0..count {
            let user = NewUser {
                username: self.generator.username(),
                password: self.generator.password(),
                email: self.generator.email(),
                first_name: self.generator.first_name(),
                last_name: self.generator.last_name(),
                role: Role::Author,
            };
            match self.store.create_user(&user).await {
                Ok(id) => {
                    self.metrics.authors_created += 1;
                    created.push(id);
                }
                Err(err) => self.skip_duplicate(err)?,
            }
            progress.tick();
        }

        progress.finish();
        info!("Created {} authors", created.len());
        Ok(created)
    }

    /// The host rejects repeated term names and logins; that unit is skipped.
    fn skip_duplicate(&mut self, err: StoreError) -> Result<(), SeederError> {
        if err.is_duplicate() {
            warn!("Skipping: {}", err);
            self.metrics.duplicates_skipped += 1;
            Ok(())
        } else {
            Err(err.into())
        }
    }

    /// Create `count` published pages by the default author.
    pub async fn create_pages(&mut self, count: u32) -> Result<Vec<EntityId>, SeederError> {
        let progress = Progress::start(self.progress, "Generating pages", u64::from(count));
        let mut created = Vec::new();

        for _ in 0..count {
            let page = NewPost {
                post_type: PostType::Page,
                title: self.generator.country(),
                content: self.generator.paragraphs(BODY_PARAGRAPHS),
                status: PostStatus::Publish,
                author: DEFAULT_AUTHOR_ID,
                date: self.generator.timestamp(),
            };
            let id = self.store.create_post(&page).await?;
            self.metrics.pages_created += 1;
            created.push(id);
            progress.tick();
        }

        progress.finish();
        info!("Created {} pages", created.len());
        Ok(created)
    }

    /// Create a batch of posts with the requested associations.
    ///
    /// Related tags, categories and authors are backfilled once, before the
    /// first post, whenever fewer than [`BACKFILL_THRESHOLD`] exist.
    pub async fn create_posts(&mut self, options: &PostOptions) -> Result<Vec<EntityId>, SeederError> {
        let flags = options.effective();
        debug!("Post batch of {} with {:?}", options.count, flags);

        let related = self.related_candidates(&flags).await?;

        let progress = Progress::start(self.progress, "Generating posts", u64::from(options.count));
        let mut created = Vec::new();

        for _ in 0..options.count {
            let author = if flags.author {
                self.generator
                    .pick_one(&related.authors)
                    .copied()
                    .unwrap_or(DEFAULT_AUTHOR_ID)
            } else {
                DEFAULT_AUTHOR_ID
            };
            let post = NewPost {
                post_type: PostType::Post,
                title: self.generator.sentence(),
                content: self.generator.paragraphs(BODY_PARAGRAPHS),
                status: PostStatus::Publish,
                author,
                date: self.generator.timestamp(),
            };
            let post_id = self.store.create_post(&post).await?;
            self.metrics.posts_created += 1;

            if flags.comment {
                self.create_comments(post_id).await?;
            }

            if flags.tags {
                let tags = self
                    .generator
                    .sample_distinct(&related.tags, TAGS_PER_POST)
                    .map_err(|e| SeederError::related("tags", e))?;
                self.store.set_post_terms(post_id, Taxonomy::Tag, &tags).await?;
            }

            if flags.category {
                let category = self.generator.pick_one(&related.categories).copied().ok_or(
                    SeederError::InsufficientRelated {
                        kind: "categories",
                        needed: 1,
                        available: 0,
                    },
                )?;
                self.store
                    .set_post_terms(post_id, Taxonomy::Category, &[category])
                    .await?;
            }

            if flags.image {
                self.attach_thumbnail(post_id).await?;
            }

            created.push(post_id);
            progress.tick();
        }

        progress.finish();
        info!("Created {} posts", created.len());
        Ok(created)
    }

    /// Create 5 fully associated posts followed by 5 pages.
    pub async fn populate_all(&mut self) -> Result<(), SeederError> {
        self.create_posts(&PostOptions::everything(DEFAULT_COUNT)).await?;
        self.create_pages(DEFAULT_COUNT).await?;
        Ok(())
    }

    async fn related_candidates(
        &mut self,
        flags: &EffectiveFlags,
    ) -> Result<RelatedCandidates, SeederError> {
        let mut related = RelatedCandidates::default();

        if flags.tags {
            related.tags = self.ensure_terms(Taxonomy::Tag).await?;
        }
        if flags.category {
            related.categories = self.ensure_terms(Taxonomy::Category).await?;
        }
        if flags.author {
            related.authors = self.ensure_authors().await?;
        }

        Ok(related)
    }

    /// Term ids of `taxonomy`, backfilled with the default count if below threshold.
    async fn ensure_terms(&mut self, taxonomy: Taxonomy) -> Result<Vec<EntityId>, SeederError> {
        let existing = self.store.query_terms(taxonomy).await?;
        if existing.len() >= BACKFILL_THRESHOLD {
            return Ok(existing.into_iter().map(|t| t.id).collect());
        }

        info!(
            "Found {} {}, creating {} more",
            existing.len(),
            taxonomy.plural(),
            DEFAULT_COUNT
        );
        match taxonomy {
            Taxonomy::Category => self.create_categories(DEFAULT_COUNT).await?,
            Taxonomy::Tag => self.create_tags(DEFAULT_COUNT).await?,
        };

        let refreshed = self.store.query_terms(taxonomy).await?;
        Ok(refreshed.into_iter().map(|t| t.id).collect())
    }

    /// Author ids, backfilled with the default count if below threshold.
    async fn ensure_authors(&mut self) -> Result<Vec<EntityId>, SeederError> {
        let existing = self.store.query_users(Role::Author).await?;
        if existing.len() >= BACKFILL_THRESHOLD {
            return Ok(existing.into_iter().map(|u| u.id).collect());
        }

        info!(
            "Found {} authors, creating {} more",
            existing.len(),
            DEFAULT_COUNT
        );
        self.create_authors(DEFAULT_COUNT).await?;

        let refreshed = self.store.query_users(Role::Author).await?;
        Ok(refreshed.into_iter().map(|u| u.id).collect())
    }

    async fn create_comments(&mut self, post: EntityId) -> Result<u32, SeederError> {
        let count = self.generator.int_in_range(COMMENTS_PER_POST);

        for _ in 0..count {
            let comment = NewComment {
                post,
                author_name: self.generator.full_name(),
                author_email: self.generator.email(),
                author_url: self.generator.url(),
                author_ip: self.generator.ipv4(),
                author_user_agent: self.generator.user_agent(),
                content: self.generator.paragraphs(COMMENT_PARAGRAPHS),
                date: self.generator.timestamp(),
                approved: true,
            };
            self.store.create_comment(&comment).await?;
            self.metrics.comments_created += 1;
        }

        debug!("Created {} comments on post {}", count, post);
        Ok(count)
    }

    /// Sideload a random image and make it the post's thumbnail.
    ///
    /// A failed sideload leaves the post without a thumbnail and is not an error.
    async fn attach_thumbnail(&mut self, post: EntityId) -> Result<(), SeederError> {
        let image_id = self.generator.int_in_range(IMAGE_IDS);
        let url = expand_pattern(&self.image_url_template, image_id);

        match self.media.sideload(&url).await {
            Ok(attachment) => {
                self.store.set_post_thumbnail(post, attachment).await?;
                self.metrics.thumbnails_attached += 1;
            }
            Err(err) => {
                warn!("Post {} left without thumbnail: {}", post, err);
                self.metrics.thumbnails_failed += 1;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_store::MemoryStore;
    use std::collections::HashSet;

    fn seeder(store: &Arc<MemoryStore>) -> Seeder {
        Seeder::new(store.clone(), store.clone(), FakeGenerator::new(42))
            .with_progress(ProgressMode::Hidden)
    }

    /// Store that reports every new term name as already taken.
    struct TermsTaken {
        inner: Arc<MemoryStore>,
    }

    #[async_trait::async_trait]
    impl ContentStore for TermsTaken {
        async fn create_term(
            &self,
            _taxonomy: Taxonomy,
            name: &str,
        ) -> Result<EntityId, StoreError> {
            Err(StoreError::Duplicate {
                kind: "term",
                name: name.to_string(),
            })
        }

        async fn create_user(&self, user: &NewUser) -> Result<EntityId, StoreError> {
            self.inner.create_user(user).await
        }

        async fn create_post(&self, post: &NewPost) -> Result<EntityId, StoreError> {
            self.inner.create_post(post).await
        }

        async fn create_comment(&self, comment: &NewComment) -> Result<EntityId, StoreError> {
            self.inner.create_comment(comment).await
        }

        async fn set_post_terms(
            &self,
            post: EntityId,
            taxonomy: Taxonomy,
            terms: &[EntityId],
        ) -> Result<(), StoreError> {
            self.inner.set_post_terms(post, taxonomy, terms).await
        }

        async fn set_post_thumbnail(
            &self,
            post: EntityId,
            attachment: EntityId,
        ) -> Result<(), StoreError> {
            self.inner.set_post_thumbnail(post, attachment).await
        }

        async fn query_terms(
            &self,
            taxonomy: Taxonomy,
        ) -> Result<Vec<content_store::Term>, StoreError> {
            self.inner.query_terms(taxonomy).await
        }

        async fn query_users(&self, role: Role) -> Result<Vec<content_store::User>, StoreError> {
            self.inner.query_users(role).await
        }
    }

    fn terms_taken_seeder(store: &Arc<MemoryStore>) -> Seeder {
        let taken = Arc::new(TermsTaken {
            inner: store.clone(),
        });
        Seeder::new(taken, store.clone(), FakeGenerator::new(42))
            .with_progress(ProgressMode::Hidden)
    }

    #[tokio::test]
    async fn test_create_terms_exact_count() {
        let store = Arc::new(MemoryStore::new());
        let mut seeder = seeder(&store);

        for count in [0u32, 1, 7] {
            let before = store.terms(Taxonomy::Category).len();
            let ids = seeder.create_categories(count).await.unwrap();
            assert_eq!(ids.len(), count as usize);
            assert_eq!(store.terms(Taxonomy::Category).len(), before + count as usize);
        }
        assert!(store
            .terms(Taxonomy::Category)
            .iter()
            .all(|t| !t.name.is_empty()));
        assert_eq!(seeder.metrics().categories_created, 8);
    }

    #[tokio::test]
    async fn test_create_authors_fields() {
        let store = Arc::new(MemoryStore::new());
        let mut seeder = seeder(&store);

        let ids = seeder.create_authors(3).await.unwrap();
        assert_eq!(ids.len(), 3);

        for stored in store.users() {
            assert_eq!(stored.user.role, Role::Author);
            assert!(!stored.user.username.is_empty());
            assert!(!stored.user.password.is_empty());
            assert!(stored.user.email.contains('@'));
            assert!(!stored.user.first_name.is_empty());
            assert!(!stored.user.last_name.is_empty());
        }
    }

    #[tokio::test]
    async fn test_duplicates_are_skipped() {
        let store = Arc::new(MemoryStore::new().with_unique_names());
        let mut seeder = seeder(&store);

        // The lorem word list is far smaller than this, so repeats are certain.
        let ids = seeder.create_tags(400).await.unwrap();

        let metrics = seeder.metrics();
        assert!(metrics.duplicates_skipped > 0);
        assert_eq!(metrics.tags_created + metrics.duplicates_skipped, 400);
        assert_eq!(ids.len() as u64, metrics.tags_created);

        let names: HashSet<_> = store.terms(Taxonomy::Tag).into_iter().map(|t| t.name).collect();
        assert_eq!(names.len(), ids.len());
    }

    #[tokio::test]
    async fn test_backfill_skipped_when_threshold_met() {
        let store = Arc::new(MemoryStore::new());
        for name in ["a", "b", "c"] {
            store.create_term(Taxonomy::Tag, name).await.unwrap();
        }
        let mut seeder = seeder(&store);

        seeder
            .create_posts(&PostOptions {
                count: 2,
                tags: true,
                ..PostOptions::default()
            })
            .await
            .unwrap();

        assert_eq!(store.terms(Taxonomy::Tag).len(), 3);
        assert_eq!(seeder.metrics().tags_created, 0);
    }

    #[tokio::test]
    async fn test_backfill_tops_up_below_threshold() {
        let store = Arc::new(MemoryStore::new());
        for name in ["a", "b"] {
            store.create_term(Taxonomy::Category, name).await.unwrap();
        }
        let mut seeder = seeder(&store);

        seeder
            .create_posts(&PostOptions {
                count: 1,
                category: true,
                ..PostOptions::default()
            })
            .await
            .unwrap();

        // Default count is created even though one category would suffice
        assert_eq!(store.terms(Taxonomy::Category).len(), 7);
        assert_eq!(store.posts()[0].categories.len(), 1);
    }

    #[tokio::test]
    async fn test_author_backfill_and_selection() {
        let store = Arc::new(MemoryStore::new());
        let mut seeder = seeder(&store);

        seeder
            .create_posts(&PostOptions {
                count: 4,
                author: true,
                ..PostOptions::default()
            })
            .await
            .unwrap();

        let author_ids: HashSet<_> = store.users().iter().map(|u| u.id).collect();
        assert_eq!(author_ids.len(), 5);
        for post in store.posts() {
            assert!(author_ids.contains(&post.post.author));
        }
    }

    #[tokio::test]
    async fn test_posts_without_flags_touch_nothing_else() {
        let store = Arc::new(MemoryStore::new());
        let mut seeder = seeder(&store);

        let ids = seeder.create_posts(&PostOptions::default()).await.unwrap();

        assert_eq!(ids.len(), 5);
        assert!(store.terms(Taxonomy::Tag).is_empty());
        assert!(store.terms(Taxonomy::Category).is_empty());
        assert!(store.users().is_empty());
        assert!(store.comments().is_empty());
        assert!(store.attachments().is_empty());
        for post in store.posts() {
            assert_eq!(post.post.author, DEFAULT_AUTHOR_ID);
            assert_eq!(post.post.status, PostStatus::Publish);
            assert_eq!(post.post.content.split("\n\n").count(), 5);
        }
    }

    #[tokio::test]
    async fn test_comments_within_range_and_linked() {
        let store = Arc::new(MemoryStore::new());
        let mut seeder = seeder(&store);

        let ids = seeder
            .create_posts(&PostOptions {
                count: 20,
                comment: true,
                ..PostOptions::default()
            })
            .await
            .unwrap();

        let mut total = 0;
        for id in &ids {
            let comments = store.comments_for(*id);
            assert!(comments.len() <= 10);
            assert!(comments.iter().all(|c| c.comment.approved));
            total += comments.len();
        }
        assert_eq!(total, store.comments().len());
        assert_eq!(seeder.metrics().comments_created, total as u64);
    }

    #[tokio::test]
    async fn test_thumbnail_failure_is_not_fatal() {
        let store = Arc::new(MemoryStore::new().with_failing_sideload());
        let mut seeder = seeder(&store);

        let ids = seeder
            .create_posts(&PostOptions {
                count: 3,
                image: true,
                ..PostOptions::default()
            })
            .await
            .unwrap();

        assert_eq!(ids.len(), 3);
        assert!(store.posts().iter().all(|p| p.thumbnail.is_none()));
        assert_eq!(seeder.metrics().thumbnails_failed, 3);
    }

    #[tokio::test]
    async fn test_thumbnail_url_from_template() {
        let store = Arc::new(MemoryStore::new());
        let mut seeder = seeder(&store).with_image_url_template("https://img.test/{id}.png");

        seeder
            .create_posts(&PostOptions {
                count: 5,
                image: true,
                ..PostOptions::default()
            })
            .await
            .unwrap();

        let attachments = store.attachments();
        assert_eq!(attachments.len(), 5);
        for attachment in &attachments {
            let id: u32 = attachment
                .source_url
                .trim_start_matches("https://img.test/")
                .trim_end_matches(".png")
                .parse()
                .unwrap();
            assert!(IMAGE_IDS.contains(&id));
        }
        for post in store.posts() {
            let thumbnail = post.thumbnail.unwrap();
            assert!(attachments.iter().any(|a| a.id == thumbnail));
        }
    }

    #[tokio::test]
    async fn test_store_failure_aborts_batch() {
        let store = Arc::new(MemoryStore::new().with_post_limit(2));
        let mut seeder = seeder(&store);

        let result = seeder.create_posts(&PostOptions::default()).await;

        assert!(matches!(result, Err(SeederError::Store(_))));
        // Partial results stay in place
        assert_eq!(store.posts().len(), 2);
        assert_eq!(seeder.metrics().posts_created, 2);
    }

    #[tokio::test]
    async fn test_too_few_tags_after_backfill_stops_batch() {
        let store = Arc::new(MemoryStore::new());
        for name in ["a", "b"] {
            store.create_term(Taxonomy::Tag, name).await.unwrap();
        }
        let mut seeder = terms_taken_seeder(&store);

        let result = seeder
            .create_posts(&PostOptions {
                count: 2,
                tags: true,
                ..PostOptions::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(SeederError::InsufficientRelated {
                kind: "tags",
                needed: 3,
                available: 2,
            })
        ));
        // The first post was stored before its tags were drawn
        assert_eq!(store.posts().len(), 1);
        assert!(store.posts()[0].tags.is_empty());
        assert_eq!(seeder.metrics().posts_created, 1);
        assert_eq!(seeder.metrics().duplicates_skipped, DEFAULT_COUNT as u64);
        assert_eq!(store.terms(Taxonomy::Tag).len(), 2);
    }

    #[tokio::test]
    async fn test_no_category_after_backfill_stops_batch() {
        let store = Arc::new(MemoryStore::new());
        let mut seeder = terms_taken_seeder(&store);

        let result = seeder
            .create_posts(&PostOptions {
                count: 3,
                category: true,
                ..PostOptions::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(SeederError::InsufficientRelated {
                kind: "categories",
                needed: 1,
                available: 0,
            })
        ));
        assert_eq!(store.posts().len(), 1);
        assert!(store.posts()[0].categories.is_empty());
        assert_eq!(seeder.metrics().categories_created, 0);
    }

    #[tokio::test]
    async fn test_huge_count_fails_on_first_store_error() {
        let store = Arc::new(MemoryStore::new().with_post_limit(0));
        let mut seeder = seeder(&store);

        let result = seeder.create_pages(u32::MAX).await;

        assert!(matches!(result, Err(SeederError::Store(_))));
        assert!(store.pages().is_empty());
    }

    #[tokio::test]
    async fn test_pages_use_country_titles_and_default_author() {
        let store = Arc::new(MemoryStore::new());
        let mut seeder = seeder(&store);

        let ids = seeder.create_pages(2).await.unwrap();

        assert_eq!(ids.len(), 2);
        assert!(store.posts().is_empty());
        for page in store.pages() {
            assert_eq!(page.post.author, DEFAULT_AUTHOR_ID);
            assert!(!page.post.title.is_empty());
            assert!(page.tags.is_empty() && page.categories.is_empty());
        }
    }
}
