use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Author recorded when a comment is submitted without one.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A likeable, commentable unit of content (a blog post, a listing, an event page).
///
/// The store owns `like_count` and `comments`; clients never write them directly,
/// they ask the engagement service to apply a delta and re-display what it returns.
///
/// # Invariants
/// - `like_count >= 0` at all times
/// - `comments` is append-only and kept in insertion (chronological) order
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[ts(export)]
pub struct ContentItem {
    pub id: Uuid,
    pub like_count: i32,
    pub comments: Vec<Comment>,
    /// Leading entries of `comments` the store already holds.
    #[serde(skip)]
    #[ts(skip)]
    pub stored_comments: usize,
}

impl ContentItem {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            like_count: 0,
            comments: Vec::new(),
            stored_comments: 0,
        }
    }

    /// Item as loaded from a store, with every comment marked as already stored.
    pub fn stored(id: Uuid, like_count: i32, comments: Vec<Comment>) -> Self {
        Self {
            id,
            like_count,
            stored_comments: comments.len(),
            comments,
        }
    }

    /// Comments appended since the item was loaded.
    pub fn pending_comments(&self) -> &[Comment] {
        &self.comments[self.stored_comments.min(self.comments.len())..]
    }

    pub fn increment_likes(&mut self) {
        self.like_count = self.like_count.saturating_add(1);
    }

    /// Removes one like, never going below zero.
    pub fn decrement_likes(&mut self) {
        self.like_count = self.like_count.saturating_sub(1).max(0);
    }

    pub fn append_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq, sqlx::FromRow)]
#[ts(export)]
pub struct Comment {
    pub id: Uuid,
    pub content_id: Uuid,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Builds a comment stamped with the server clock.
    ///
    /// Callers validate `content`; a blank or missing `author` becomes [`ANONYMOUS_AUTHOR`].
    pub fn new(content_id: Uuid, content: &str, author: Option<&str>) -> Self {
        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(ANONYMOUS_AUTHOR);
        Self {
            id: Uuid::now_v7(),
            content_id,
            content: content.trim().to_string(),
            author: author.to_string(),
            created_at: Utc::now(),
        }
    }
}
