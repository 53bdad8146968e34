//! Error types for the ideaforge gateway.
//!
//! This crate provides the error taxonomy shared by every ideaforge crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The gateway taxonomy ([`GatewayErrorKind`]) is closed: callers branch on it
//! exhaustively to decide between failing visibly, retrying later, or alerting
//! an operator.
//!
//! # Examples
//!
//! ```
//! use ideaforge_error::{GatewayError, GatewayErrorKind, IdeaforgeResult};
//!
//! fn call_provider() -> IdeaforgeResult<String> {
//!     Err(GatewayError::new(GatewayErrorKind::RemoteRateLimited {
//!         status: 429,
//!         message: "slow down".to_string(),
//!     }))?
//! }
//!
//! match call_provider() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gateway;

pub use config::ConfigError;
pub use error::{IdeaforgeError, IdeaforgeErrorKind, IdeaforgeResult};
pub use gateway::{GatewayError, GatewayErrorKind, GatewayResult, RetryableError};
