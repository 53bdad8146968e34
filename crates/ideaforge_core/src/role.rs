//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a message in the provider's conversation format.
///
/// # Examples
///
/// ```
/// use ideaforge_core::Role;
///
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
/// assert_eq!(format!("{}", Role::Assistant), "assistant");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Messages from the human side of the conversation
    #[display("user")]
    User,
    /// Messages produced by the model
    #[display("assistant")]
    Assistant,
}
