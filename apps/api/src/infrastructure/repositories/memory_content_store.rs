use crate::domain::engagement::{
    content::ContentItem, errors::DomainError, repository::ContentStore,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local content store for development runs and tests.
#[derive(Default)]
pub struct InMemoryContentStore {
    items: RwLock<HashMap<Uuid, ContentItem>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an item, replacing any item with the same id.
    pub async fn insert(&self, item: ContentItem) {
        let stored = ContentItem::stored(item.id, item.like_count, item.comments);
        self.items.write().await.insert(stored.id, stored);
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn find(&self, id: Uuid) -> Result<Option<ContentItem>, DomainError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn find_counter(&self, id: Uuid) -> Result<Option<ContentItem>, DomainError> {
        Ok(self
            .items
            .read()
            .await
            .get(&id)
            .map(|item| ContentItem::stored(item.id, item.like_count, Vec::new())))
    }

    async fn save(&self, item: ContentItem) -> Result<ContentItem, DomainError> {
        let mut items = self.items.write().await;
        let mut comments = items
            .get(&item.id)
            .map(|existing| existing.comments.clone())
            .unwrap_or_default();

        // Append-only: keep what is stored, add comments not seen before.
        for comment in &item.comments {
            if !comments.iter().any(|c| c.id == comment.id) {
                comments.push(comment.clone());
            }
        }

        let stored = ContentItem::stored(item.id, item.like_count.max(0), comments);
        items.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
