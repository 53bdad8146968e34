//! Rate-limited gateway to a generative-content provider.
//!
//! A [`Gateway`] admits each call through a shared
//! [`PermitPool`](ideaforge_rate_limit::PermitPool), sends at most one request
//! through a [`Transport`], and classifies the outcome into a
//! [`GatewayErrorKind`](ideaforge_error::GatewayErrorKind).
//!
//! # Example
//!
//! ```no_run
//! use ideaforge_models::{AnthropicTransport, Gateway, GenerationSettings};
//! use ideaforge_rate_limit::{IdeaforgeConfig, PermitPool, Replenisher};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IdeaforgeConfig::load()?;
//! let pool = Arc::new(PermitPool::new(config.rate_limit.capacity()?));
//! let mut replenisher = Replenisher::new(pool.clone(), config.rate_limit.replenish_interval())?;
//! replenisher.start();
//!
//! let transport = AnthropicTransport::from_config(&config.anthropic, config.api_key()?)?;
//! let gateway = Gateway::new(pool, transport, GenerationSettings::from(&config.anthropic))
//!     .with_acquire_timeout(config.rate_limit.acquire_timeout());
//!
//! println!("{}", gateway.generate_text("Three names for a bakery").await?);
//! replenisher.stop();
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod classify;
mod gateway;
mod ideas;
mod metrics;
mod transport;

pub use anthropic::AnthropicTransport;
pub use classify::classify_outcome;
pub use gateway::{DEFAULT_ACQUIRE_TIMEOUT, Gateway, GenerationSettings};
pub use ideas::{combine_ideas_prompt, refine_idea_prompt, template_prompt, twist_prompt};
pub use metrics::{GatewayMetrics, OUTCOME_SUCCESS};
pub use transport::{Transport, TransportFailure, TransportResponse};
