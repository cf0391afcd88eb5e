use super::content::ContentItem;
use super::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence port for content items.
///
/// Implementations must make a single `save` atomic for one item; nothing above this
/// layer links a `find` and the following `save` into a transaction.
///
/// `save` writes the like counter and appends the item's pending comments. Comments the
/// store already holds are never dropped or rewritten, whatever the caller's copy contains.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<ContentItem>, DomainError>;
    /// Loads the item without its comments, for counter updates and comment appends.
    async fn find_counter(&self, id: Uuid) -> Result<Option<ContentItem>, DomainError>;
    async fn save(&self, item: ContentItem) -> Result<ContentItem, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}
