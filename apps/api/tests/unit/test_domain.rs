use engagement_api::{
    application::engagement::use_case::EngagementService,
    client::{
        interaction_cache::{DislikeTransition, EngagementState, InteractionCache, LikeTransition},
        store::InMemoryInteractionStore,
    },
    domain::engagement::{content::ContentItem, errors::DomainError},
    infrastructure::repositories::memory_content_store::InMemoryContentStore,
};
use std::sync::Arc;
use uuid::Uuid;

fn cache() -> InteractionCache<InMemoryInteractionStore> {
    InteractionCache::new(InMemoryInteractionStore::default())
}

#[test]
fn fresh_item_is_neither_liked_nor_disliked() {
    let cache = cache();
    let id = Uuid::now_v7();
    assert!(!cache.is_liked(id));
    assert!(!cache.is_disliked(id));

    assert_eq!(cache.toggle_like(id), LikeTransition::Liked);
    assert!(cache.is_liked(id));
}

#[test]
fn toggle_like_twice_returns_to_neutral() {
    let cache = cache();
    let id = Uuid::now_v7();
    cache.toggle_like(id);
    assert_eq!(cache.toggle_like(id), LikeTransition::Unliked);
    assert_eq!(cache.state(id), EngagementState::Neutral);
}

#[test]
fn disliked_goes_straight_to_liked() {
    let cache = cache();
    let id = Uuid::now_v7();
    assert_eq!(cache.toggle_dislike(id), DislikeTransition::Disliked);
    assert_eq!(cache.toggle_like(id), LikeTransition::Liked);
    assert!(cache.is_liked(id));
    assert!(!cache.is_disliked(id));
}

#[test]
fn liked_goes_straight_to_disliked() {
    let cache = cache();
    let id = Uuid::now_v7();
    cache.toggle_like(id);
    assert_eq!(cache.toggle_dislike(id), DislikeTransition::Disliked);
    assert!(cache.is_disliked(id));
    assert!(!cache.is_liked(id));
    assert_eq!(cache.toggle_dislike(id), DislikeTransition::Undisliked);
    assert_eq!(cache.state(id), EngagementState::Neutral);
}

#[test]
fn items_are_tracked_independently() {
    let cache = cache();
    let a = Uuid::now_v7();
    let b = Uuid::now_v7();
    cache.toggle_like(a);
    cache.toggle_dislike(b);
    assert!(cache.is_liked(a) && !cache.is_disliked(a));
    assert!(cache.is_disliked(b) && !cache.is_liked(b));
}

#[tokio::test]
async fn service_counts_follow_the_documented_scenarios() {
    let store = Arc::new(InMemoryContentStore::new());
    let id = Uuid::now_v7();
    store.insert(ContentItem::new(id)).await;
    let service = EngagementService::new(store);

    assert_eq!(service.like(id).await, Ok(1));
    assert_eq!(service.like(id).await, Ok(2));
    assert_eq!(service.dislike(id).await, Ok(1));
    assert_eq!(service.unlike(id).await, Ok(0));
    assert_eq!(service.unlike(id).await, Ok(0));
    assert_eq!(service.dislike(id).await, Ok(0));
}

#[tokio::test]
async fn service_reports_unknown_items() {
    let service = EngagementService::new(Arc::new(InMemoryContentStore::new()));
    assert!(matches!(
        service.get_engagement(Uuid::now_v7()).await,
        Err(DomainError::NotFound(_))
    ));
}
