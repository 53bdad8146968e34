//! Admission control and configuration for the ideaforge gateway.
//!
//! This crate provides the fixed-window rate limiter that gates every outbound
//! provider call:
//!
//! - [`PermitPool`] - a bounded pool of permits; each call consumes one
//! - [`Replenisher`] - a background task that refills the pool once per window
//! - [`IdeaforgeConfig`] - layered TOML/env configuration read once at startup
//!
//! The pool is an ordinary value. Construct it once, wrap it in an `Arc`, and
//! hand clones to the gateway and to the replenisher.
//!
//! ```no_run
//! use ideaforge_rate_limit::{IdeaforgeConfig, PermitPool, Replenisher};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IdeaforgeConfig::load()?;
//! let pool = Arc::new(PermitPool::new(config.rate_limit.capacity()?));
//! let mut replenisher = Replenisher::new(pool.clone(), config.rate_limit.replenish_interval())?;
//! replenisher.start();
//! # replenisher.stop();
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod pool;
mod replenisher;

pub use config::{AnthropicConfig, IdeaforgeConfig, RateLimitSettings};
pub use pool::PermitPool;
pub use replenisher::Replenisher;
