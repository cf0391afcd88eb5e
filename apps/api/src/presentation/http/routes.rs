use super::{
    handlers::{engagement, health},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Engagement
        .route("/content/{id}", get(engagement::get_engagement))
        .route("/content/{id}/like", post(engagement::like_content))
        .route("/content/{id}/unlike", post(engagement::unlike_content))
        .route("/content/{id}/dislike", post(engagement::dislike_content))
        .route(
            "/content/{id}/comments",
            post(engagement::add_comment).get(engagement::get_comments),
        )
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
