//! Message types for the provider conversation format.

use crate::{ContentPart, Role};
use serde::{Deserialize, Serialize};

/// One turn of a conversation: a role and an ordered list of content parts.
///
/// # Examples
///
/// ```
/// use ideaforge_core::{ContentPart, Message, Role};
///
/// let message = Message::builder()
///     .role(Role::User)
///     .content(vec![ContentPart::text("Hello!")])
///     .build()
///     .unwrap();
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content().len(), 1);
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
pub struct Message {
    /// The author of the message
    role: Role,
    /// Ordered content parts
    content: Vec<ContentPart>,
}

impl Message {
    /// Creates a new message builder.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// A user message holding a single text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentPart::text(text)],
        }
    }
}
