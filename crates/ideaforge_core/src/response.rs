//! Provider response body.

use crate::ContentPart;
use serde::{Deserialize, Serialize};

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the prompt
    #[serde(default)]
    pub input_tokens: u64,
    /// Tokens produced by the model
    #[serde(default)]
    pub output_tokens: u64,
}

/// Decoded success body from the provider.
///
/// Only `content` is required; metadata fields decode when present.
///
/// # Examples
///
/// ```
/// use ideaforge_core::MessagesResponse;
///
/// let body = r#"{ "content": [ { "type": "text", "text": "An idea" } ] }"#;
/// let response: MessagesResponse = serde_json::from_str(body).unwrap();
/// assert_eq!(response.text(), Some("An idea"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MessagesResponse {
    /// Provider-assigned response id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    /// Model that produced the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    /// Ordered content parts
    content: Vec<ContentPart>,
    /// Why generation stopped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stop_reason: Option<String>,
    /// Token usage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<Usage>,
}

impl MessagesResponse {
    /// Response holding only the given content parts.
    pub fn from_content(content: Vec<ContentPart>) -> Self {
        Self {
            id: None,
            model: None,
            content,
            stop_reason: None,
            usage: None,
        }
    }

    /// Text of the first content part, the single-turn convention.
    ///
    /// Returns `None` when the response is empty or its first part is not text.
    pub fn text(&self) -> Option<&str> {
        self.content.first().and_then(ContentPart::as_text)
    }

    /// All text parts concatenated in order.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .filter_map(ContentPart::as_text)
            .collect::<Vec<_>>()
            .join("")
    }
}
