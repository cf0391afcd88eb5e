use crate::domain::engagement::{
    content::{Comment, ContentItem},
    errors::DomainError,
    repository::ContentStore,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxContentStore {
    pub pool: PgPool,
}

impl SqlxContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SqlxContentStore {
    async fn like_count(&self, id: Uuid) -> Result<Option<i32>, DomainError> {
        sqlx::query_scalar::<_, i32>("SELECT like_count FROM content_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::ServiceError(e.to_string()))
    }
}

#[async_trait]
impl ContentStore for SqlxContentStore {
    async fn find(&self, id: Uuid) -> Result<Option<ContentItem>, DomainError> {
        let Some(like_count) = self.like_count(id).await? else {
            return Ok(None);
        };

        // `seq` is a serial column, so it orders comments stamped in the same instant.
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, content_id, content, author, created_at \
             FROM comments \
             WHERE content_id = $1 \
             ORDER BY seq ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::ServiceError(e.to_string()))?;

        Ok(Some(ContentItem::stored(id, like_count, comments)))
    }

    async fn find_counter(&self, id: Uuid) -> Result<Option<ContentItem>, DomainError> {
        Ok(self
            .like_count(id)
            .await?
            .map(|like_count| ContentItem::stored(id, like_count, Vec::new())))
    }

    async fn save(&self, item: ContentItem) -> Result<ContentItem, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::ServiceError(e.to_string()))?;

        sqlx::query(
            "INSERT INTO content_items (id, like_count) VALUES ($1, GREATEST(0, $2)) \
             ON CONFLICT (id) DO UPDATE SET like_count = EXCLUDED.like_count, updated_at = NOW()",
        )
        .bind(item.id)
        .bind(item.like_count)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::ServiceError(e.to_string()))?;

        let pending = item.pending_comments();
        if !pending.is_empty() {
            let ids: Vec<Uuid> = pending.iter().map(|c| c.id).collect();
            let content_ids: Vec<Uuid> = pending.iter().map(|c| c.content_id).collect();
            let bodies: Vec<String> = pending.iter().map(|c| c.content.clone()).collect();
            let authors: Vec<String> = pending.iter().map(|c| c.author.clone()).collect();
            let created: Vec<DateTime<Utc>> = pending.iter().map(|c| c.created_at).collect();

            // One statement for the batch; rows already stored are left as they are.
            sqlx::query(
                "INSERT INTO comments (id, content_id, content, author, created_at) \
                 SELECT * FROM UNNEST($1::uuid[], $2::uuid[], $3::text[], $4::text[], \
                                      $5::timestamptz[]) \
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(ids)
            .bind(content_ids)
            .bind(bodies)
            .bind(authors)
            .bind(created)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::ServiceError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::ServiceError(e.to_string()))?;

        let ContentItem {
            id,
            like_count,
            comments,
            ..
        } = item;
        Ok(ContentItem::stored(id, like_count.max(0), comments))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::ServiceError(e.to_string()))?;
        Ok(())
    }
}
