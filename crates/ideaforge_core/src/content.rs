//! Typed content parts.

use serde::{Deserialize, Serialize};

/// A single typed part of message or response content.
///
/// Parts are tagged by `type` on the wire. Only text is sent; part types the
/// provider may return that this gateway does not interpret decode as
/// [`ContentPart::Other`] instead of failing the whole response.
///
/// # Examples
///
/// ```
/// use ideaforge_core::ContentPart;
///
/// let part = ContentPart::text("hello");
/// let json = serde_json::to_value(&part).unwrap();
/// assert_eq!(json["type"], "text");
/// assert_eq!(json["text"], "hello");
/// assert_eq!(part.as_text(), Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text
    Text {
        /// The text payload
        text: String,
    },
    /// Any part type this gateway does not interpret
    #[serde(other)]
    Other,
}

impl ContentPart {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    /// Returns the text payload if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text { text } => Some(text),
            ContentPart::Other => None,
        }
    }
}
