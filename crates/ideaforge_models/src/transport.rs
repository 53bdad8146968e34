//! The seam between the gateway and the network.

use async_trait::async_trait;
use ideaforge_core::MessagesRequest;

/// Raw HTTP response as seen by the gateway, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    /// Creates a transport response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failure before any HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TransportFailure {
    /// The request deadline elapsed
    #[display("request timed out: {}", _0)]
    Timeout(String),
    /// The connection could not be established
    #[display("connection failed: {}", _0)]
    Connect(String),
    /// Anything else (request building, TLS, body decoding, ...)
    #[display("transport error: {}", _0)]
    Other(String),
}

impl std::error::Error for TransportFailure {}

/// Sends a request to the provider and reports what came back.
///
/// Implementations perform exactly one network exchange per call and never
/// retry. Non-success HTTP statuses are returned as `Ok` responses; only the
/// absence of a response is an `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver `request` and return the raw response.
    async fn send(&self, request: &MessagesRequest)
    -> Result<TransportResponse, TransportFailure>;
}
