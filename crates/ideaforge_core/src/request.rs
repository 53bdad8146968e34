//! Outbound request body.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Body of a generation request sent to the provider.
///
/// Serializes to the provider's JSON shape:
///
/// ```json
/// { "model": "...", "max_tokens": 1024, "temperature": 0.7,
///   "messages": [ { "role": "user", "content": [ { "type": "text", "text": "..." } ] } ] }
/// ```
///
/// # Examples
///
/// ```
/// use ideaforge_core::{Message, MessagesRequest};
///
/// let request = MessagesRequest::builder()
///     .model("claude-3-5-haiku-latest")
///     .max_tokens(256u32)
///     .temperature(0.7f32)
///     .messages(vec![Message::user_text("Hi")])
///     .build()
///     .unwrap();
///
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["max_tokens"], 256);
/// assert_eq!(json["messages"][0]["role"], "user");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct MessagesRequest {
    /// Model identifier
    model: String,
    /// Maximum number of tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Conversation messages, oldest first
    messages: Vec<Message>,
}

impl MessagesRequest {
    /// Creates a new request builder.
    pub fn builder() -> MessagesRequestBuilder {
        MessagesRequestBuilder::default()
    }

    /// Single-turn request: one user message whose only part is `prompt`.
    pub fn single_turn(
        model: impl Into<String>,
        max_tokens: u32,
        temperature: f32,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            temperature,
            messages: vec![Message::user_text(prompt)],
        }
    }
}
