//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the ideaforge binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::{report_error, run};
