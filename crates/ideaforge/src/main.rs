//! Ideaforge CLI binary.
//!
//! This binary provides command-line access to the gateway:
//! - Send free-form prompts
//! - Refine, combine and twist ideas
//! - Inspect the effective configuration

use clap::Parser;
use ideaforge::telemetry::{LogFormat, init_console_telemetry};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Pick up ANTHROPIC_API_KEY from .env when present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = cli::Cli::parse();
    let as_json = cli.json;

    let format = if as_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    if let Err(e) = init_console_telemetry(format, cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report_error(&e, as_json);
            ExitCode::FAILURE
        }
    }
}
