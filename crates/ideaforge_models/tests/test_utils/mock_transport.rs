//! Mock transport for testing.

use async_trait::async_trait;
use ideaforge_core::MessagesRequest;
use ideaforge_models::{Transport, TransportFailure, TransportResponse};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::success_body;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always answer 200 with the given text
    Success(String),
    /// Always answer with the given status and body
    Status(u16, String),
    /// Always fail before a response arrives
    Failure(TransportFailure),
    /// Answer from the list in order; the last entry repeats
    Sequence(Vec<Result<TransportResponse, TransportFailure>>),
}

/// Scripted transport that counts calls and records the last request.
///
/// Clones share their counters, so a test can keep a handle after moving the
/// transport into a gateway.
#[derive(Debug, Clone)]
pub struct MockTransport {
    behavior: MockBehavior,
    delay: Option<Duration>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<MessagesRequest>>>,
}

impl MockTransport {
    /// Create a mock transport with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            delay: None,
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a mock transport that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock transport that always answers with `status`.
    pub fn new_status(status: u16, body: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Status(status, body.into()))
    }

    /// Create a mock transport that never gets a response.
    pub fn new_failure(failure: TransportFailure) -> Self {
        Self::new_with_behavior(MockBehavior::Failure(failure))
    }

    /// Hold every call for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times send() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent request handed to send().
    pub fn last_request(&self) -> Option<MessagesRequest> {
        self.last_request.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<TransportResponse, TransportFailure> {
        let mut count = self.call_count.lock().unwrap();
        let current = *count;
        *count += 1;

        match &self.behavior {
            MockBehavior::Success(text) => Ok(TransportResponse::new(200, success_body(text))),
            MockBehavior::Status(status, body) => Ok(TransportResponse::new(*status, body.clone())),
            MockBehavior::Failure(failure) => Err(failure.clone()),
            MockBehavior::Sequence(responses) => {
                let index = current.min(responses.len().saturating_sub(1));
                responses
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| Err(TransportFailure::Other("empty sequence".to_string())))
            }
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        request: &MessagesRequest,
    ) -> Result<TransportResponse, TransportFailure> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        let response = self.next_response();
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        response
    }
}
