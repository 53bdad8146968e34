//! GatewayRuntime wiring tests.

use async_trait::async_trait;
use ideaforge::{
    GatewayErrorKind, GatewayRuntime, IdeaforgeConfig, IdeaforgeErrorKind, MessagesRequest,
    Transport, TransportFailure, TransportResponse,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Transport that always succeeds and counts calls.
#[derive(Clone, Default)]
struct CountingTransport {
    calls: Arc<AtomicUsize>,
}

impl CountingTransport {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for CountingTransport {
    async fn send(
        &self,
        request: &MessagesRequest,
    ) -> Result<TransportResponse, TransportFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let body = serde_json::json!({
            "model": request.model(),
            "content": [ { "type": "text", "text": "idea" } ]
        });
        Ok(TransportResponse::new(200, body.to_string()))
    }
}

fn config_with_capacity(capacity: u32) -> IdeaforgeConfig {
    let mut config = IdeaforgeConfig::default();
    config.rate_limit.permits_per_minute = capacity;
    config
}

#[tokio::test(start_paused = true)]
async fn test_runtime_enforces_window() -> anyhow::Result<()> {
    let transport = CountingTransport::default();
    let runtime = GatewayRuntime::with_transport(&config_with_capacity(2), transport.clone())?;
    assert!(runtime.is_replenishing());
    assert_eq!(runtime.pool().capacity(), 2);

    runtime.gateway().generate_text("one").await?;
    runtime.gateway().generate_text("two").await?;

    let err = runtime.gateway().generate_text("three").await.unwrap_err();
    assert!(matches!(
        err.kind(),
        GatewayErrorKind::LocalQuotaExceeded { .. }
    ));
    assert_eq!(transport.calls(), 2);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(runtime.gateway().generate_text("four").await?, "idea");
    assert_eq!(transport.calls(), 3);

    runtime.shutdown();
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_refills() -> anyhow::Result<()> {
    let runtime =
        GatewayRuntime::with_transport(&config_with_capacity(1), CountingTransport::default())?;
    let pool = runtime.pool().clone();

    runtime.gateway().generate_text("only").await?;
    assert_eq!(pool.available(), 0);

    runtime.shutdown();
    tokio::time::sleep(Duration::from_secs(180)).await;
    assert_eq!(pool.available(), 0);
    Ok(())
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let result = GatewayRuntime::with_transport(&config_with_capacity(0), CountingTransport::default());
    let err = result.err().expect("zero capacity must be rejected");
    assert!(matches!(err.kind(), IdeaforgeErrorKind::Config(_)));
}

#[tokio::test]
async fn test_start_uses_configured_endpoint() -> anyhow::Result<()> {
    let mut config = IdeaforgeConfig::default();
    config.anthropic.endpoint = "http://127.0.0.1:9/v1/messages".to_string();
    config.anthropic.model = "claude-3-5-sonnet-latest".to_string();

    let runtime = GatewayRuntime::start(&config, "test-key")?;
    assert_eq!(runtime.gateway().transport().endpoint(), config.anthropic.endpoint);
    assert_eq!(runtime.gateway().settings().model, "claude-3-5-sonnet-latest");
    assert_eq!(
        runtime.gateway().acquire_timeout(),
        config.rate_limit.acquire_timeout()
    );
    runtime.shutdown();
    Ok(())
}

#[test]
#[should_panic]
fn test_starting_outside_tokio_panics() {
    let _ = GatewayRuntime::with_transport(&config_with_capacity(1), CountingTransport::default());
}

#[test]
fn test_invalid_config_fails_before_spawning() {
    // Validation runs first, so no runtime is needed to see the error
    let result = GatewayRuntime::with_transport(&config_with_capacity(0), CountingTransport::default());
    assert!(result.is_err());
}
