use crate::domain::engagement::{content::Comment, errors::DomainError};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Serialize, Deserialize, TS, Validate)]
#[ts(export)]
pub struct AddCommentRequest {
    #[validate(length(max = 500, message = "Comment must be 500 characters or less"))]
    pub content: String,
    #[validate(length(max = 80, message = "Author must be 80 characters or less"))]
    #[serde(default)]
    pub author: Option<String>,
}

impl AddCommentRequest {
    /// Checks the length limits and that the body is not blank.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|errors| DomainError::ValidationError(first_message(&errors)))?;
        if self.content.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Comment cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid request".to_string())
}

/// Body of every like, unlike and dislike response. `likes` is authoritative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
pub struct LikesResponse {
    pub success: bool,
    pub likes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommentResponse {
    pub success: bool,
    pub comment: Comment,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommentsResponse {
    pub success: bool,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
pub struct EngagementSummary {
    pub id: Uuid,
    pub likes: i32,
    pub comments: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
