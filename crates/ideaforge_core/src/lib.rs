//! Core data types for the ideaforge gateway.
//!
//! This crate provides the request and response shapes exchanged with the
//! generative-content provider, plus the small domain inputs the prompt
//! wrappers accept.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod content;
mod idea;
mod message;
mod request;
mod response;
mod role;

pub use content::ContentPart;
pub use idea::IdeaDraft;
pub use message::{Message, MessageBuilder, MessageBuilderError};
pub use request::{MessagesRequest, MessagesRequestBuilder, MessagesRequestBuilderError};
pub use response::{MessagesResponse, Usage};
pub use role::Role;
