use super::store::InteractionStore;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Tri-state engagement flag of this client for one content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum EngagementState {
    #[default]
    Neutral,
    Liked,
    Disliked,
}

/// Outcome of pressing "like".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum LikeTransition {
    Liked,
    Unliked,
}

/// Outcome of pressing "dislike".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DislikeTransition {
    Disliked,
    Undisliked,
}

impl EngagementState {
    pub fn after_like(self) -> (Self, LikeTransition) {
        match self {
            Self::Liked => (Self::Neutral, LikeTransition::Unliked),
            Self::Neutral | Self::Disliked => (Self::Liked, LikeTransition::Liked),
        }
    }

    pub fn after_dislike(self) -> (Self, DislikeTransition) {
        match self {
            Self::Disliked => (Self::Neutral, DislikeTransition::Undisliked),
            Self::Neutral | Self::Liked => (Self::Disliked, DislikeTransition::Disliked),
        }
    }
}

/// Persisted shape of one entry: `{ "liked": bool, "disliked": bool }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InteractionRecord {
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub disliked: bool,
}

impl From<EngagementState> for InteractionRecord {
    fn from(state: EngagementState) -> Self {
        Self {
            liked: state == EngagementState::Liked,
            disliked: state == EngagementState::Disliked,
        }
    }
}

impl From<InteractionRecord> for EngagementState {
    fn from(record: InteractionRecord) -> Self {
        match (record.liked, record.disliked) {
            (true, false) => Self::Liked,
            (false, true) => Self::Disliked,
            (false, false) => Self::Neutral,
            (true, true) => {
                tracing::warn!("interaction record has both flags set, treating as neutral");
                Self::Neutral
            }
        }
    }
}

/// Per-item like/dislike memory of the current client.
///
/// Toggles never fail and never touch the network; the caller issues the matching
/// server call (see [`super::sync::EngagementSync`]).
pub struct InteractionCache<S> {
    store: S,
}

impl<S: InteractionStore> InteractionCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn state(&self, content_id: Uuid) -> EngagementState {
        self.store.get(content_id).unwrap_or_default()
    }

    pub fn toggle_like(&self, content_id: Uuid) -> LikeTransition {
        let (next, transition) = self.state(content_id).after_like();
        self.store.set(content_id, next);
        transition
    }

    pub fn toggle_dislike(&self, content_id: Uuid) -> DislikeTransition {
        let (next, transition) = self.state(content_id).after_dislike();
        self.store.set(content_id, next);
        transition
    }

    pub fn is_liked(&self, content_id: Uuid) -> bool {
        self.state(content_id) == EngagementState::Liked
    }

    pub fn is_disliked(&self, content_id: Uuid) -> bool {
        self.state(content_id) == EngagementState::Disliked
    }

    /// Puts back a state captured before a toggle.
    pub fn restore(&self, content_id: Uuid, state: EngagementState) {
        self.store.set(content_id, state);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
