use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    store: &'static str,
    backend: String,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let store_status = match state.engagement.health().await {
        Ok(()) => "up",
        Err(e) => {
            tracing::error!("Health check failed: content store unreachable: {}", e);
            "down"
        }
    };

    let (code, status) = if store_status == "up" {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        code,
        Json(HealthResponse {
            status,
            store: store_status,
            backend: state.config.content_store.to_string(),
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
