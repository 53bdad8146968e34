//! Ideaforge - rate-limited generative-content gateway
//!
//! Ideaforge sits between application code and a hosted text-generation
//! provider. Every outbound call is admitted through a fixed-window permit
//! pool, sent at most once, and its outcome classified into a closed error
//! taxonomy the caller can branch on.
//!
//! # Quick Start
//!
//! ```no_run
//! use ideaforge::{GatewayRuntime, IdeaforgeConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IdeaforgeConfig::load()?;
//! let runtime = GatewayRuntime::start(&config, config.api_key()?)?;
//!
//! let idea = runtime.gateway().generate_text("A new use for old bicycles").await?;
//! println!("{}", idea);
//!
//! runtime.shutdown();
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Ideaforge is organized as a workspace with focused crates:
//!
//! - `ideaforge_error` - Error taxonomy
//! - `ideaforge_core` - Request, response and idea types
//! - `ideaforge_rate_limit` - Permit pool, replenisher and configuration
//! - `ideaforge_models` - Gateway, transports and idea prompts
//!
//! This crate (`ideaforge`) re-exports everything for convenience and wires
//! the pieces together in [`GatewayRuntime`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod runtime;
pub mod telemetry;

pub use runtime::GatewayRuntime;

// Re-export error types
pub use ideaforge_error::{
    ConfigError, GatewayError, GatewayErrorKind, GatewayResult, IdeaforgeError,
    IdeaforgeErrorKind, IdeaforgeResult, RetryableError,
};

// Re-export core types
pub use ideaforge_core::{ContentPart, IdeaDraft, Message, MessagesRequest, MessagesResponse, Role, Usage};

// Re-export admission control and configuration
pub use ideaforge_rate_limit::{
    AnthropicConfig, IdeaforgeConfig, PermitPool, RateLimitSettings, Replenisher,
};

// Re-export the gateway
pub use ideaforge_models::{
    AnthropicTransport, DEFAULT_ACQUIRE_TIMEOUT, Gateway, GatewayMetrics, GenerationSettings,
    Transport, TransportFailure, TransportResponse, classify_outcome, combine_ideas_prompt,
    refine_idea_prompt, template_prompt, twist_prompt,
};
