//! Test utilities for gateway tests.
//!
//! This module provides a scripted transport and request helpers.

use ideaforge_models::{Gateway, GenerationSettings};
use ideaforge_rate_limit::PermitPool;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

pub mod mock_transport;

#[allow(unused_imports)]
pub use mock_transport::{MockBehavior, MockTransport};

/// Model name used by every test gateway.
pub const TEST_MODEL: &str = "mock-model";

/// Settings used by every test gateway.
pub fn test_settings() -> GenerationSettings {
    GenerationSettings {
        model: TEST_MODEL.to_string(),
        max_tokens: 256,
        temperature: 0.5,
    }
}

/// A success body whose only content part is `text`.
pub fn success_body(text: &str) -> String {
    serde_json::json!({
        "id": "msg_test",
        "model": TEST_MODEL,
        "content": [ { "type": "text", "text": text } ],
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 3, "output_tokens": 5 }
    })
    .to_string()
}

/// Gateway over `transport` with a fresh pool of `capacity` permits.
pub fn gateway_with_capacity(
    capacity: u32,
    transport: MockTransport,
    acquire_timeout: Duration,
) -> (Arc<PermitPool>, Gateway<MockTransport>) {
    let pool = Arc::new(PermitPool::new(
        NonZeroU32::new(capacity).expect("capacity must be positive"),
    ));
    let gateway = Gateway::new(pool.clone(), transport, test_settings())
        .with_acquire_timeout(acquire_timeout);
    (pool, gateway)
}
