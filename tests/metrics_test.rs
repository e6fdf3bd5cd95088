//! Tests for metrics integration.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

use std::sync::Arc;

use async_trait::async_trait;
use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use bench_router::cache::ManualClock;
use bench_router::leaderboard::LeaderboardClient;
use bench_router::telemetry;
use bench_router::{CatalogSource, Category, GatewayModel, Resolver, Result};

// ============================================================================
// Mock catalog
// ============================================================================

struct StaticCatalog;

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn list(&self) -> Result<Arc<Vec<GatewayModel>>> {
        Ok(Arc::new(vec![GatewayModel::new("qwen/qwen9-max", "")]))
    }
}

// ============================================================================
// Snapshot type alias for readability
// ============================================================================

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

// ============================================================================
// Helpers
// ============================================================================

/// Sum all counter values matching a metric name and one label pair.
fn counter_with_label(snapshot: &SnapshotVec, name: &str, label: (&str, &str)) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| {
            key.kind() == MetricKind::Counter
                && key.key().name() == name
                && key
                    .key()
                    .labels()
                    .any(|l| l.key() == label.0 && l.value() == label.1)
        })
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn cache_and_upstream_counters() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "modelId": "gpt-5", "wins": 1, "losses": 0, "battles": 1,
                "winRate": 100.0, "elo": 1400.0
            }]
        })))
        .mount(&server)
        .await;

    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let client = LeaderboardClient::from_parts(
                    reqwest::Client::new(),
                    server.uri(),
                    Arc::new(ManualClock::new()),
                );
                for _ in 0..3 {
                    client.fetch(Category::Website).await.unwrap();
                }
            })
        })
    });

    let snapshot = snapshotter.snapshot().into_vec();
    let cache = ("cache", "leaderboard");
    assert_eq!(counter_with_label(&snapshot, telemetry::CACHE_MISSES_TOTAL, cache), 1);
    assert_eq!(counter_with_label(&snapshot, telemetry::CACHE_HITS_TOTAL, cache), 2);
    assert_eq!(
        counter_with_label(&snapshot, telemetry::UPSTREAM_REQUESTS_TOTAL, ("status", "ok")),
        1
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn failed_upstream_request_is_counted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let result = metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                LeaderboardClient::with_url(server.uri())
                    .fetch(Category::All)
                    .await
            })
        })
    });
    assert!(result.is_err());

    let snapshot = snapshotter.snapshot().into_vec();
    assert_eq!(
        counter_with_label(&snapshot, telemetry::UPSTREAM_REQUESTS_TOTAL, ("status", "error")),
        1
    );
    assert_eq!(
        counter_with_label(
            &snapshot,
            telemetry::UPSTREAM_REQUESTS_TOTAL,
            ("upstream", "leaderboard")
        ),
        1
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn resolutions_are_counted_by_tier() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let resolver = Resolver::new(Arc::new(StaticCatalog));
                for id in ["gpt-5", "riftrunner", "obsidian", "qwen9-max", "qwen9.max", "nope"] {
                    resolver.resolve(id).await.unwrap();
                }
            })
        })
    });

    let snapshot = snapshotter.snapshot().into_vec();
    let count = |source: &str| counter_with_label(&snapshot, telemetry::RESOLUTIONS_TOTAL, ("source", source));
    assert_eq!(count("static"), 2);
    assert_eq!(count("excluded"), 1);
    assert_eq!(count("dynamic"), 1);
    assert_eq!(count("fuzzy"), 1);
    assert_eq!(count("none"), 1);
}

#[tokio::test]
async fn metrics_are_noop_without_recorder() {
    // Verify no panics when no recorder is installed.
    let resolver = Resolver::new(Arc::new(StaticCatalog));
    assert!(resolver.resolve("gpt-5").await.unwrap().is_some());
}
