use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use engagement_api::{
    application::engagement::use_case::EngagementService,
    config::Config,
    domain::engagement::content::ContentItem,
    infrastructure::repositories::memory_content_store::InMemoryContentStore,
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub app: Router,
    pub store: Arc<InMemoryContentStore>,
}

impl TestApp {
    pub async fn seed_item(&self, likes: i32) -> Uuid {
        let id = Uuid::now_v7();
        self.store
            .insert(ContentItem {
                like_count: likes,
                ..ContentItem::new(id)
            })
            .await;
        id
    }
}

pub fn spawn_app() -> TestApp {
    let store = Arc::new(InMemoryContentStore::new());
    let state = AppState {
        config: Config::in_memory(),
        engagement: Arc::new(EngagementService::new(store.clone())),
    };

    TestApp {
        app: create_router(state),
        store,
    }
}

/// Serves the router on an ephemeral local port and returns its base URL.
pub async fn serve(app: &TestApp) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no address");
    let router = app.app.clone();
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("test server crashed");
    });
    format!("http://{}", addr)
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}
