use super::dto::{AddCommentRequest, EngagementSummary};
use crate::domain::engagement::{
    content::{Comment, ContentItem},
    errors::DomainError,
    repository::ContentStore,
};
use std::sync::Arc;
use uuid::Uuid;

/// Owns the authoritative like counter and comment list of every content item.
///
/// Each operation is a single find-then-save against the store. There is no
/// optimistic-concurrency token, so two writers racing on the same item resolve
/// last-write-wins, and there is no idempotency key, so a repeated `like` counts twice.
pub struct EngagementService {
    store: Arc<dyn ContentStore>,
}

impl EngagementService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn like(&self, content_id: Uuid) -> Result<i32, DomainError> {
        let mut item = self.load_counter(content_id).await?;
        item.increment_likes();
        let saved = self.store.save(item).await?;
        tracing::debug!(%content_id, likes = saved.like_count, "like applied");
        Ok(saved.like_count)
    }

    pub async fn unlike(&self, content_id: Uuid) -> Result<i32, DomainError> {
        let mut item = self.load_counter(content_id).await?;
        item.decrement_likes();
        let saved = self.store.save(item).await?;
        tracing::debug!(%content_id, likes = saved.like_count, "unlike applied");
        Ok(saved.like_count)
    }

    /// Retracts the weight of one like when there is one to retract.
    ///
    /// There is no separate dislike tally; a dislike on an item with zero likes
    /// leaves the counter untouched.
    pub async fn dislike(&self, content_id: Uuid) -> Result<i32, DomainError> {
        let mut item = self.load_counter(content_id).await?;
        if item.like_count > 0 {
            item.decrement_likes();
        }
        let saved = self.store.save(item).await?;
        tracing::debug!(%content_id, likes = saved.like_count, "dislike applied");
        Ok(saved.like_count)
    }

    pub async fn add_comment(
        &self,
        content_id: Uuid,
        request: AddCommentRequest,
    ) -> Result<Comment, DomainError> {
        request.check()?;

        let mut item = self.load_counter(content_id).await?;
        let comment = Comment::new(content_id, &request.content, request.author.as_deref());
        item.append_comment(comment.clone());
        self.store.save(item).await?;
        tracing::info!(%content_id, comment_id = %comment.id, "comment added");
        Ok(comment)
    }

    pub async fn list_comments(&self, content_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        Ok(self.load(content_id).await?.comments)
    }

    /// Current server-side view of an item, used by clients to reconcile after a failure.
    pub async fn get_engagement(
        &self,
        content_id: Uuid,
    ) -> Result<EngagementSummary, DomainError> {
        let item = self.load(content_id).await?;
        Ok(EngagementSummary {
            id: item.id,
            likes: item.like_count,
            comments: item.comments.len() as i64,
        })
    }

    pub async fn health(&self) -> Result<(), DomainError> {
        self.store.ping().await
    }

    async fn load(&self, content_id: Uuid) -> Result<ContentItem, DomainError> {
        self.store
            .find(content_id)
            .await?
            .ok_or_else(|| not_found(content_id))
    }

    /// Loads the counter only; comments already stored are not read or rewritten.
    async fn load_counter(&self, content_id: Uuid) -> Result<ContentItem, DomainError> {
        self.store
            .find_counter(content_id)
            .await?
            .ok_or_else(|| not_found(content_id))
    }
}

fn not_found(content_id: Uuid) -> DomainError {
    DomainError::NotFound(format!("Content {} not found", content_id))
}
