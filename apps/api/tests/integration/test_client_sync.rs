use super::helpers::{serve, spawn_app};
use engagement_api::client::{
    api::{EngagementApi, HttpEngagementApi},
    config::ClientConfig,
    errors::ClientError,
    interaction_cache::{DislikeTransition, InteractionCache, LikeTransition},
    store::{FileInteractionStore, InMemoryInteractionStore},
    sync::EngagementSync,
};
use std::time::Duration;
use uuid::Uuid;

fn http_api(base_url: String) -> HttpEngagementApi {
    HttpEngagementApi::from_config(&ClientConfig {
        base_url,
        request_timeout: Duration::from_secs(5),
        ..ClientConfig::default()
    })
    .expect("client should build")
}

#[tokio::test]
async fn like_unlike_round_trip_over_http() {
    let app = spawn_app();
    let id = app.seed_item(0).await;
    let sync = EngagementSync::new(
        InteractionCache::new(InMemoryInteractionStore::default()),
        http_api(serve(&app).await),
    );

    let liked = sync.press_like(id).await.expect("like");
    assert_eq!(liked.transition, LikeTransition::Liked);
    assert_eq!(liked.likes, Some(1));
    assert!(sync.cache().is_liked(id));

    let unliked = sync.press_like(id).await.expect("unlike");
    assert_eq!(unliked.transition, LikeTransition::Unliked);
    assert_eq!(unliked.likes, Some(0));
    assert!(!sync.cache().is_liked(id));
    assert!(!sync.cache().is_disliked(id));
}

#[tokio::test]
async fn dislike_after_like_retracts_the_like() {
    let app = spawn_app();
    let id = app.seed_item(3).await;
    let sync = EngagementSync::new(
        InteractionCache::new(InMemoryInteractionStore::default()),
        http_api(serve(&app).await),
    );

    sync.press_like(id).await.expect("like");
    assert_eq!(sync.displayed_likes(id), Some(4));

    let disliked = sync.press_dislike(id).await.expect("dislike");
    assert_eq!(disliked.transition, DislikeTransition::Disliked);
    assert_eq!(disliked.likes, Some(3));

    let undisliked = sync.press_dislike(id).await.expect("undislike");
    assert_eq!(undisliked.transition, DislikeTransition::Undisliked);
    assert_eq!(undisliked.likes, None);
    assert_eq!(sync.refresh(id).await.expect("refresh"), 3);
}

#[tokio::test]
async fn http_errors_map_to_client_errors() {
    let app = spawn_app();
    let id = app.seed_item(0).await;
    let api = http_api(serve(&app).await);

    assert!(matches!(
        api.like(Uuid::now_v7()).await,
        Err(ClientError::NotFound(_))
    ));

    let sync = EngagementSync::new(
        InteractionCache::new(InMemoryInteractionStore::default()),
        api,
    );
    assert_eq!(
        sync.add_comment(id, "  ", None).await.expect_err("blank comment"),
        ClientError::Validation("Comment cannot be empty".into())
    );

    let comment = sync
        .add_comment(id, "See you at the bake sale", Some("Room 12"))
        .await
        .expect("comment");
    let comments = sync.comments(id).await.expect("comments");
    assert_eq!(comments.last().map(|c| c.id), Some(comment.id));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error_and_keeps_local_state() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let id = Uuid::now_v7();
    let sync = EngagementSync::new(
        InteractionCache::new(InMemoryInteractionStore::default()),
        http_api(format!("http://{}", addr)),
    );

    let err = sync.press_like(id).await.expect_err("server is down");
    assert!(matches!(err, ClientError::Network(_)));
    assert!(sync.cache().is_liked(id));
    assert_eq!(sync.displayed_likes(id), None);
}

#[tokio::test]
async fn file_backed_cache_remembers_across_sessions() {
    let app = spawn_app();
    let id = app.seed_item(0).await;
    let base_url = serve(&app).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("interactions.json");

    {
        let store = FileInteractionStore::open(&path).expect("open");
        let sync = EngagementSync::new(InteractionCache::new(store), http_api(base_url.clone()));
        sync.press_like(id).await.expect("like");
    }

    let store = FileInteractionStore::open(&path).expect("reopen");
    let sync = EngagementSync::new(InteractionCache::new(store), http_api(base_url));
    assert!(sync.cache().is_liked(id));

    let outcome = sync.press_like(id).await.expect("unlike");
    assert_eq!(outcome.transition, LikeTransition::Unliked);
    assert_eq!(outcome.likes, Some(0));
}

#[tokio::test]
async fn configured_client_persists_to_the_configured_file() {
    let app = spawn_app();
    let id = app.seed_item(0).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("interactions.json");
    let config = ClientConfig {
        base_url: serve(&app).await,
        interactions_path: path.clone(),
        request_timeout: Duration::from_secs(5),
        rollback_on_failure: false,
    };

    let sync = EngagementSync::from_config(&config).expect("client should build");
    assert_eq!(sync.press_like(id).await.expect("like").likes, Some(1));

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).expect("file written")).expect("json");
    assert_eq!(
        raw[id.to_string()],
        serde_json::json!({ "liked": true, "disliked": false })
    );
}

#[tokio::test]
async fn configured_rollback_restores_state_when_server_is_down() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let dir = tempfile::tempdir().expect("tempdir");
    let config = ClientConfig {
        base_url: format!("http://{}", addr),
        interactions_path: dir.path().join("interactions.json"),
        request_timeout: Duration::from_secs(5),
        rollback_on_failure: true,
    };

    let id = Uuid::now_v7();
    let sync = EngagementSync::from_config(&config).expect("client should build");
    let err = sync.press_like(id).await.expect_err("server is down");
    assert!(matches!(err, ClientError::Network(_)));
    assert!(!sync.cache().is_liked(id));
    assert!(!sync.cache().is_disliked(id));
}
