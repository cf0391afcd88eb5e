use crate::application::engagement::dto::{
    AddCommentRequest, CommentResponse, CommentsResponse, EngagementSummary, LikesResponse,
};
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

/// An id that is not a UUID cannot name any stored item.
fn content_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("Content {} not found", raw)))
}

fn likes(count: i32) -> Json<LikesResponse> {
    Json(LikesResponse {
        success: true,
        likes: count,
    })
}

pub async fn like_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LikesResponse>, AppError> {
    Ok(likes(state.engagement.like(content_id(&id)?).await?))
}

pub async fn unlike_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LikesResponse>, AppError> {
    Ok(likes(state.engagement.unlike(content_id(&id)?).await?))
}

pub async fn dislike_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LikesResponse>, AppError> {
    Ok(likes(state.engagement.dislike(content_id(&id)?).await?))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AddCommentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let id = content_id(&id)?;
    let Json(request) = body?;

    let comment = state.engagement.add_comment(id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            success: true,
            comment,
        }),
    ))
}

pub async fn get_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CommentsResponse>, AppError> {
    let comments = state.engagement.list_comments(content_id(&id)?).await?;
    Ok(Json(CommentsResponse {
        success: true,
        comments,
    }))
}

pub async fn get_engagement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EngagementSummary>, AppError> {
    Ok(Json(state.engagement.get_engagement(content_id(&id)?).await?))
}
