use super::{
    api::{EngagementApi, HttpEngagementApi},
    config::ClientConfig,
    errors::{ClientError, ClientSetupError},
    interaction_cache::{DislikeTransition, EngagementState, InteractionCache, LikeTransition},
    store::{FileInteractionStore, InteractionStore},
};
use crate::application::engagement::dto::AddCommentRequest;
use crate::domain::engagement::content::Comment;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};
use uuid::Uuid;

/// Result of a like or dislike press after the server round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome<T> {
    pub transition: T,
    /// Count confirmed by the server, or `None` when no server call was needed.
    pub likes: Option<i32>,
}

/// Sequences a local toggle with its server call.
///
/// The cache is toggled first for immediate feedback, then exactly one request is made
/// based on the transition. The count the server returns becomes the displayed count.
///
/// When a call fails the local toggle stays applied, so the client flag and the server
/// counter can disagree until the next successful round trip. With
/// `rollback_on_failure` set, failures that leave the server state unknown restore the
/// previous local state instead.
pub struct EngagementSync<S, A> {
    cache: InteractionCache<S>,
    api: A,
    rollback_on_failure: bool,
    confirmed_likes: Mutex<HashMap<Uuid, i32>>,
}

impl EngagementSync<FileInteractionStore, HttpEngagementApi> {
    /// File-backed cache at `interactions_path` talking HTTP to `base_url`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientSetupError> {
        let store = FileInteractionStore::open(&config.interactions_path)?;
        let api = HttpEngagementApi::from_config(config)?;
        Ok(Self::new(InteractionCache::new(store), api)
            .with_rollback_on_failure(config.rollback_on_failure))
    }
}

impl<S: InteractionStore, A: EngagementApi> EngagementSync<S, A> {
    pub fn new(cache: InteractionCache<S>, api: A) -> Self {
        Self {
            cache,
            api,
            rollback_on_failure: false,
            confirmed_likes: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_rollback_on_failure(mut self, enabled: bool) -> Self {
        self.rollback_on_failure = enabled;
        self
    }

    pub fn cache(&self) -> &InteractionCache<S> {
        &self.cache
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn press_like(
        &self,
        content_id: Uuid,
    ) -> Result<SyncOutcome<LikeTransition>, ClientError> {
        let previous = self.cache.state(content_id);
        let transition = self.cache.toggle_like(content_id);

        let result = match transition {
            LikeTransition::Liked => self.api.like(content_id).await,
            LikeTransition::Unliked => self.api.unlike(content_id).await,
        };

        let likes = self.settle(content_id, previous, result)?;
        Ok(SyncOutcome {
            transition,
            likes: Some(likes),
        })
    }

    pub async fn press_dislike(
        &self,
        content_id: Uuid,
    ) -> Result<SyncOutcome<DislikeTransition>, ClientError> {
        let previous = self.cache.state(content_id);
        let transition = self.cache.toggle_dislike(content_id);

        let likes = match transition {
            DislikeTransition::Disliked => {
                let result = self.api.dislike(content_id).await;
                Some(self.settle(content_id, previous, result)?)
            }
            // The server keeps no dislike tally, so there is nothing to retract.
            DislikeTransition::Undisliked => None,
        };

        Ok(SyncOutcome { transition, likes })
    }

    pub async fn add_comment(
        &self,
        content_id: Uuid,
        content: &str,
        author: Option<&str>,
    ) -> Result<Comment, ClientError> {
        let request = AddCommentRequest {
            content: content.to_string(),
            author: author.map(str::to_string),
        };
        self.api.add_comment(content_id, request).await
    }

    pub async fn comments(&self, content_id: Uuid) -> Result<Vec<Comment>, ClientError> {
        self.api.list_comments(content_id).await
    }

    /// Re-reads the authoritative count, replacing whatever is displayed.
    pub async fn refresh(&self, content_id: Uuid) -> Result<i32, ClientError> {
        let summary = self.api.get_engagement(content_id).await?;
        self.confirm(content_id, summary.likes);
        Ok(summary.likes)
    }

    /// Last count the server confirmed for this item, if any.
    pub fn displayed_likes(&self, content_id: Uuid) -> Option<i32> {
        self.confirmed().get(&content_id).copied()
    }

    fn settle(
        &self,
        content_id: Uuid,
        previous: EngagementState,
        result: Result<i32, ClientError>,
    ) -> Result<i32, ClientError> {
        match result {
            Ok(likes) => {
                self.confirm(content_id, likes);
                Ok(likes)
            }
            Err(e) => {
                if self.rollback_on_failure && e.is_indeterminate() {
                    self.cache.restore(content_id, previous);
                    tracing::warn!(
                        %content_id,
                        ?previous,
                        "server call failed, local toggle rolled back: {}",
                        e
                    );
                } else {
                    tracing::warn!(%content_id, "server call failed, local toggle kept: {}", e);
                }
                Err(e)
            }
        }
    }

    fn confirm(&self, content_id: Uuid, likes: i32) {
        self.confirmed().insert(content_id, likes);
    }

    fn confirmed(&self) -> MutexGuard<'_, HashMap<Uuid, i32>> {
        self.confirmed_likes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
