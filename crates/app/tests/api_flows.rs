//! End-to-end data-fetching flows: typed envelopes into stores, pagination
//! queries, and request-scope cancellation.

mod support;

use reelforge_client::api::{ApiError, ReelListQuery};
use reelforge_domain::types::{ReelStatus, VideoStatus};
use support::context_over;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn video_list_yields_typed_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [
                {
                    "id": "v1",
                    "userId": "u1",
                    "title": "Launch talk",
                    "youtubeUrl": "https://youtu.be/abc123",
                    "duration": 93.5,
                    "thumbnail": "https://cdn.example.com/v1.jpg",
                    "status": "completed",
                    "reelsCount": 3,
                    "createdAt": "2025-05-01T10:00:00Z",
                    "updatedAt": "2025-05-01T10:05:00Z"
                },
                {
                    "id": "v2",
                    "userId": "u1",
                    "title": "Q&A session",
                    "youtubeUrl": "https://youtu.be/def456",
                    "duration": 1800.0,
                    "thumbnail": "https://cdn.example.com/v2.jpg",
                    "status": "processing",
                    "reelsCount": 0,
                    "createdAt": "2025-05-02T09:00:00Z",
                    "updatedAt": "2025-05-02T09:00:00Z"
                }
            ]
        })))
        .mount(&server)
        .await;

    let (context, _storage) = context_over(&server);
    let videos = context.api.video().list().await.expect("list").into_data().expect("data");

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].id, "v1");
    assert_eq!(videos[0].status, VideoStatus::Completed);
    assert_eq!(videos[1].status, VideoStatus::Processing);
}

#[tokio::test]
async fn reel_listing_flows_into_the_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reels"))
        .and(query_param("status", "ready"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [{
                "id": "r1",
                "videoId": "v1",
                "title": "Highlight 1",
                "duration": 31.2,
                "thumbnail": "https://cdn.example.com/r1.jpg",
                "videoUrl": "https://cdn.example.com/r1.mp4",
                "status": "ready",
                "createdAt": "2025-05-01T11:00:00Z",
                "updatedAt": "2025-05-01T11:00:00Z"
            }]
        })))
        .mount(&server)
        .await;

    let (context, _storage) = context_over(&server);
    let query =
        ReelListQuery { status: Some(ReelStatus::Ready), skip: None, limit: Some(10) };
    let reels =
        context.api.reels().list(&query).await.expect("list").into_data().expect("data");

    // Page logic: fetch through the API surface, then write into the store.
    context.reels.set_reels(reels);

    let snapshot = context.reels.snapshot();
    assert_eq!(snapshot.reels.len(), 1);
    assert_eq!(snapshot.reels[0].status, ReelStatus::Ready);
}

#[tokio::test]
async fn pending_publish_count_decodes_backend_field_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reels/pending-publish/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": {"pending_count": 4}
        })))
        .mount(&server)
        .await;

    let (context, _storage) = context_over(&server);
    let count = context
        .api
        .reels()
        .pending_publish_count()
        .await
        .expect("count")
        .into_data()
        .expect("data");

    assert_eq!(count.pending_count, 4);
}

#[tokio::test]
async fn cancelled_scope_resolves_without_side_effects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/video"))
        .respond_with(
            ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let (context, _storage) = context_over(&server);
    let cancel = CancellationToken::new();
    let scoped = context.api.scoped(cancel.clone());

    let handle = tokio::spawn(async move { scoped.video().list().await });
    cancel.cancel();

    let result = handle.await.expect("join");
    assert!(matches!(result, Err(ApiError::Cancelled)));
    assert!(context.reels.snapshot().reels.is_empty());
    assert!(!context.session.is_authenticated());
}
