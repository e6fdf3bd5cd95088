//! Integration tests for [`LeaderboardClient`]: sorting, per-category
//! caching, TTL expiry and upstream failures.

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bench_router::cache::{LEADERBOARD_TTL, ManualClock};
use bench_router::leaderboard::LeaderboardClient;
use bench_router::{Category, RouterError};

fn entry(model_id: &str, elo: f64) -> Value {
    json!({
        "modelId": model_id,
        "wins": 10,
        "losses": 5,
        "battles": 15,
        "winRate": 66.67,
        "elo": elo,
        "btStdErr": 12.5,
        "avgGenerationTimeMs": 5400.0,
        "insufficientVotes": false
    })
}

fn leaderboard(category: &str, data: Vec<Value>) -> Value {
    json!({
        "success": true,
        "arenaType": "models",
        "category": category,
        "data": data,
        "metadata": { "lastUpdateTime": "2025-11-20T00:00:00Z", "totalVotes": 1234 },
        "timestamp": "2025-11-20T00:00:00Z"
    })
}

fn client(server: &MockServer, clock: &ManualClock) -> LeaderboardClient {
    LeaderboardClient::from_parts(
        reqwest::Client::new(),
        format!("{}/api/leaderboard", server.uri()),
        Arc::new(clock.clone()),
    )
}

#[tokio::test]
async fn entries_are_sorted_by_elo_descending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/leaderboard"))
        .and(body_json(json!({ "arenaType": "models", "category": "website" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(leaderboard(
            "website",
            vec![entry("claude-sonnet-4-5", 1300.0), entry("riftrunner", 1350.0)],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, &ManualClock::new());
    let entries = client.fetch(Category::Website).await.unwrap();

    let ids: Vec<&str> = entries.iter().map(|e| e.model_id.as_str()).collect();
    assert_eq!(ids, ["riftrunner", "claude-sonnet-4-5"]);
    assert_eq!(entries[0].bt_std_err, Some(12.5));
    assert!(!entries[0].insufficient_votes);
}

#[tokio::test]
async fn one_request_per_category_within_ttl() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "category": "website" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(leaderboard("website", vec![entry("gpt-5", 1400.0)])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "category": "svg" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(leaderboard("svg", vec![entry("claude-opus-4-1", 1380.0)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, &ManualClock::new());
    let first = client.fetch(Category::Website).await.unwrap();
    let second = client.fetch(Category::Website).await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let svg = client.fetch(Category::Svg).await.unwrap();
    assert_eq!(svg[0].model_id, "claude-opus-4-1");
    assert_eq!(client.fetch(Category::Website).await.unwrap()[0].model_id, "gpt-5");
    // `expect(1)` on each mock is verified when the server drops.
}

#[tokio::test]
async fn expired_entry_is_refetched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(leaderboard("allcategories", vec![entry("gpt-5", 1400.0)])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let clock = ManualClock::new();
    let client = client(&server, &clock);

    client.fetch(Category::All).await.unwrap();
    clock.advance(LEADERBOARD_TTL - std::time::Duration::from_secs(1));
    client.fetch(Category::All).await.unwrap();
    clock.advance(std::time::Duration::from_secs(1));
    client.fetch(Category::All).await.unwrap();
}

#[tokio::test]
async fn server_error_names_status_and_category() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client(&server, &ManualClock::new());
    let err = client.fetch(Category::Website).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    let message = err.to_string();
    assert!(message.contains("500"), "{message}");
    assert!(message.contains("website"), "{message}");
}

#[tokio::test]
async fn unsuccessful_envelope_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": false, "data": [] })),
        )
        .mount(&server)
        .await;

    let client = client(&server, &ManualClock::new());
    let err = client.fetch(Category::Logo).await.unwrap_err();
    assert!(matches!(
        err,
        RouterError::UpstreamRejected {
            category: Category::Logo
        }
    ));
}

#[tokio::test]
async fn failed_refresh_does_not_serve_stale_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(leaderboard("video", vec![entry("veo-3", 1290.0)])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let clock = ManualClock::new();
    let client = client(&server, &clock);

    client.fetch(Category::Video).await.unwrap();
    clock.advance(LEADERBOARD_TTL);

    let err = client.fetch(Category::Video).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    // Still expired, still failing: no stale fallback.
    assert!(client.fetch(Category::Video).await.is_err());
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client(&server, &ManualClock::new());
    let err = client.fetch(Category::All).await.unwrap_err();
    assert!(matches!(err, RouterError::Json(_)));
}

#[tokio::test]
async fn clear_forces_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(leaderboard("tts", vec![entry("eleven-v3", 1200.0)])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server, &ManualClock::new());
    client.fetch(Category::TextToSpeech).await.unwrap();
    client.clear();
    client.fetch(Category::TextToSpeech).await.unwrap();
}

#[tokio::test]
async fn invalidate_drops_only_one_category() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "category": "image" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(leaderboard("image", vec![entry("imagen-4", 1250.0)])),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "category": "3d" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(leaderboard("3d", vec![entry("gpt-5", 1300.0)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, &ManualClock::new());
    client.fetch(Category::Image).await.unwrap();
    client.fetch(Category::ThreeD).await.unwrap();

    client.invalidate(Category::Image).await;
    client.fetch(Category::Image).await.unwrap();
    client.fetch(Category::ThreeD).await.unwrap();
}
