//! Integration tests for [`CatalogClient`] against a mock gateway.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bench_router::cache::{CATALOG_TTL, ManualClock};
use bench_router::gateway::CatalogClient;
use bench_router::{RouterError, Upstream};

fn catalog_body() -> serde_json::Value {
    json!({
        "data": [
            {
                "id": "anthropic/claude-sonnet-4.5",
                "name": "Anthropic: Claude Sonnet 4.5",
                "description": "Frontier coding model.",
                "context_length": 1000000,
                "pricing": { "prompt": "0.000003", "completion": "0.000015" }
            },
            { "id": "openai/gpt-5", "name": "OpenAI: GPT-5" },
            { "id": "qwen/qwen3-coder" }
        ]
    })
}

fn client(server: &MockServer, clock: &ManualClock) -> CatalogClient {
    // Trailing slash is trimmed.
    CatalogClient::from_parts(
        reqwest::Client::new(),
        format!("{}/api/v1/", server.uri()),
        Arc::new(clock.clone()),
    )
}

#[tokio::test]
async fn list_parses_catalog_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, &ManualClock::new());
    let models = client.list().await.unwrap();

    let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        ["anthropic/claude-sonnet-4.5", "openai/gpt-5", "qwen/qwen3-coder"]
    );
    assert_eq!(models[0].context_length, Some(1_000_000));
    assert_eq!(
        models[0].pricing.as_ref().unwrap().prompt.as_deref(),
        Some("0.000003")
    );
    assert_eq!(models[2].name, "");
    assert_eq!(models[2].slug(), "qwen3-coder");
}

#[tokio::test]
async fn catalog_is_cached_until_ttl() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .expect(2)
        .mount(&server)
        .await;

    let clock = ManualClock::new();
    let client = client(&server, &clock);

    client.list().await.unwrap();
    client.list().await.unwrap();
    clock.advance(CATALOG_TTL);
    client.list().await.unwrap();
    client.list().await.unwrap();
}

#[tokio::test]
async fn unauthorized_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/models"))
        .respond_with(ResponseTemplate::new(401).set_body_string("no auth"))
        .mount(&server)
        .await;

    let client = client(&server, &ManualClock::new());
    let err = client.list().await.unwrap_err();

    assert!(matches!(
        err,
        RouterError::UpstreamUnavailable {
            upstream: Upstream::Catalog,
            status: 401,
            ..
        }
    ));
    let message = err.to_string();
    assert!(message.contains("401"), "{message}");
    assert!(message.contains("gateway models API"), "{message}");
    assert!(!message.contains("no auth"), "catalog errors omit the body");
}

#[tokio::test]
async fn failures_are_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .mount(&server)
        .await;

    let client = client(&server, &ManualClock::new());
    assert!(client.list().await.is_err());
    assert_eq!(client.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn unreachable_gateway_is_an_http_error() {
    // Bind an ephemeral port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CatalogClient::with_base_url(format!("http://{addr}"));
    let err = client.list().await.unwrap_err();
    assert!(matches!(err, RouterError::Http(_)));
}
