//! Mapping of transport outcomes onto the gateway error taxonomy.

use crate::{TransportFailure, TransportResponse};
use ideaforge_core::MessagesResponse;
use ideaforge_error::{GatewayError, GatewayErrorKind, GatewayResult};

/// Longest slice of a provider error body kept in an error message.
const MAX_BODY_IN_MESSAGE: usize = 512;

/// Classify the outcome of one transport call.
///
/// | Outcome | Result |
/// |---|---|
/// | 2xx with a decodable body | `Ok(MessagesResponse)` |
/// | 429 | `RemoteRateLimited` |
/// | 401, 403 | `AuthFailure` |
/// | 5xx | `ServiceUnavailable` |
/// | timeout or connection failure | `Timeout` |
/// | anything else | `Unknown` |
///
/// # Examples
///
/// ```
/// use ideaforge_models::{classify_outcome, TransportResponse};
/// use ideaforge_error::GatewayErrorKind;
///
/// let err = classify_outcome(Ok(TransportResponse::new(429, "slow down"))).unwrap_err();
/// assert!(matches!(err.kind(), GatewayErrorKind::RemoteRateLimited { status: 429, .. }));
/// ```
pub fn classify_outcome(
    outcome: Result<TransportResponse, TransportFailure>,
) -> GatewayResult<MessagesResponse> {
    let response = match outcome {
        Ok(response) => response,
        Err(TransportFailure::Timeout(message)) | Err(TransportFailure::Connect(message)) => {
            return Err(GatewayError::new(GatewayErrorKind::Timeout(message)));
        }
        Err(TransportFailure::Other(message)) => {
            return Err(GatewayError::new(GatewayErrorKind::Unknown {
                status: None,
                message,
            }));
        }
    };

    let status = response.status;
    let message = truncate(&response.body);

    let kind = match status {
        200..=299 => {
            return serde_json::from_str::<MessagesResponse>(&response.body).map_err(|e| {
                GatewayError::new(GatewayErrorKind::Unknown {
                    status: Some(status),
                    message: format!("Failed to decode provider response: {}", e),
                })
            });
        }
        429 => GatewayErrorKind::RemoteRateLimited { status, message },
        401 | 403 => GatewayErrorKind::AuthFailure { status, message },
        500..=599 => GatewayErrorKind::ServiceUnavailable { status, message },
        _ => GatewayErrorKind::Unknown {
            status: Some(status),
            message,
        },
    };

    Err(GatewayError::new(kind))
}

fn truncate(body: &str) -> String {
    if body.len() <= MAX_BODY_IN_MESSAGE {
        return body.to_string();
    }
    let mut end = MAX_BODY_IN_MESSAGE;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
