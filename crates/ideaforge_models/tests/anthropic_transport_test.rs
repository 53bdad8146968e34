//! AnthropicTransport against an in-process stand-in provider.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use ideaforge_core::MessagesRequest;
use ideaforge_error::GatewayErrorKind;
use ideaforge_models::{AnthropicTransport, Transport, TransportFailure, classify_outcome};
use ideaforge_rate_limit::AnthropicConfig;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the stand-in provider saw and how it answers.
#[derive(Clone)]
struct ProviderState {
    status: StatusCode,
    body: Value,
    delay: Duration,
    seen: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
}

impl ProviderState {
    fn new(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body,
            delay: Duration::ZERO,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

async fn messages(
    State(state): State<ProviderState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    state.seen.lock().unwrap().push((headers, payload));
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, Json(state.body.clone()))
}

/// Serve the stand-in provider on an ephemeral port and return its endpoint.
async fn spawn_provider(state: ProviderState) -> anyhow::Result<String> {
    let router = Router::new()
        .route("/v1/messages", post(messages))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{}/v1/messages", addr))
}

fn transport_for(endpoint: String, request_timeout_secs: u64) -> anyhow::Result<AnthropicTransport> {
    let config = AnthropicConfig {
        endpoint,
        request_timeout_secs,
        connect_timeout_secs: 1,
        ..AnthropicConfig::default()
    };
    Ok(AnthropicTransport::from_config(&config, "test-key")?)
}

fn request() -> MessagesRequest {
    MessagesRequest::single_turn("claude-3-5-haiku-latest", 128, 0.5, "X")
}

#[tokio::test]
async fn test_sends_headers_and_body() -> anyhow::Result<()> {
    let state = ProviderState::new(
        StatusCode::OK,
        json!({ "content": [ { "type": "text", "text": "hi" } ] }),
    );
    let endpoint = spawn_provider(state.clone()).await?;
    let transport = transport_for(endpoint, 5)?;

    let response = transport.send(&request()).await?;
    assert_eq!(response.status, 200);

    let seen = state.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (headers, body) = &seen[0];
    assert_eq!(headers["x-api-key"], "test-key");
    assert_eq!(headers["anthropic-version"], "2023-06-01");
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(
        *body,
        json!({
            "model": "claude-3-5-haiku-latest",
            "max_tokens": 128,
            "temperature": 0.5,
            "messages": [ { "role": "user", "content": [ { "type": "text", "text": "X" } ] } ]
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_success_classifies_to_response() -> anyhow::Result<()> {
    let state = ProviderState::new(
        StatusCode::OK,
        json!({
            "id": "msg_1",
            "content": [ { "type": "text", "text": "A kite that charges phones" } ],
            "stop_reason": "end_turn"
        }),
    );
    let endpoint = spawn_provider(state).await?;
    let transport = transport_for(endpoint, 5)?;

    let response = classify_outcome(transport.send(&request()).await)?;
    assert_eq!(response.text(), Some("A kite that charges phones"));
    Ok(())
}

#[tokio::test]
async fn test_error_statuses_are_returned_not_raised() -> anyhow::Result<()> {
    let cases = [
        (StatusCode::TOO_MANY_REQUESTS, "remote_rate_limited"),
        (StatusCode::UNAUTHORIZED, "auth_failure"),
        (StatusCode::FORBIDDEN, "auth_failure"),
        (StatusCode::INTERNAL_SERVER_ERROR, "service_unavailable"),
        (StatusCode::BAD_REQUEST, "unknown"),
    ];
    for (status, label) in cases {
        let state = ProviderState::new(
            status,
            json!({ "type": "error", "error": { "type": "test", "message": "nope" } }),
        );
        let endpoint = spawn_provider(state).await?;
        let transport = transport_for(endpoint, 5)?;

        let raw = transport.send(&request()).await?;
        assert_eq!(raw.status, status.as_u16());
        assert!(raw.body.contains("nope"));

        let err = classify_outcome(Ok(raw)).unwrap_err();
        assert_eq!(err.kind().label(), label, "status {}", status);
    }
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_is_timeout() -> anyhow::Result<()> {
    // Reserve a port, then close it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let transport = transport_for(format!("http://{}/v1/messages", addr), 5)?;
    let outcome = transport.send(&request()).await;
    assert!(matches!(outcome, Err(TransportFailure::Connect(_))));

    let err = classify_outcome(outcome).unwrap_err();
    assert!(matches!(err.kind(), GatewayErrorKind::Timeout(_)));
    Ok(())
}

#[tokio::test]
async fn test_slow_provider_is_timeout() -> anyhow::Result<()> {
    let mut state = ProviderState::new(StatusCode::OK, json!({ "content": [] }));
    state.delay = Duration::from_secs(5);
    let endpoint = spawn_provider(state).await?;
    let transport = transport_for(endpoint, 1)?;

    let outcome = transport.send(&request()).await;
    assert!(matches!(outcome, Err(TransportFailure::Timeout(_))));

    let err = classify_outcome(outcome).unwrap_err();
    assert!(matches!(err.kind(), GatewayErrorKind::Timeout(_)));
    Ok(())
}

#[test]
fn test_debug_redacts_api_key() {
    let transport = AnthropicTransport::new("sk-secret-value");
    let rendered = format!("{:?}", transport);
    assert!(!rendered.contains("sk-secret-value"));
    assert!(rendered.contains("api.anthropic.com"));
}
