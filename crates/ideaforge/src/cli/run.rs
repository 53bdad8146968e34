//! Command handlers.

use super::commands::{Cli, Commands, GenerationCommand};
use ideaforge::{
    Gateway, GatewayResult, GatewayRuntime, IdeaDraft, IdeaforgeConfig, IdeaforgeError,
    IdeaforgeResult, Transport,
};
use serde_json::json;
use tracing::{debug, instrument};

/// Execute the parsed command line.
///
/// # Errors
///
/// Returns configuration errors, or the classified gateway error of the call.
pub async fn run(cli: Cli) -> IdeaforgeResult<()> {
    let config = IdeaforgeConfig::load_with_override(cli.config.as_deref())?;

    match cli.command {
        Commands::Config => {
            print_config(&config, cli.json);
            Ok(())
        }
        Commands::Generation(command) => {
            let runtime = GatewayRuntime::start(&config, config.api_key()?)?;
            let result = execute(runtime.gateway(), &command).await;
            runtime.shutdown();

            let text = result?;
            print_text(&text, cli.json);
            Ok(())
        }
    }
}

/// Dispatch one generation command to the gateway.
#[instrument(skip(gateway))]
async fn execute<T: Transport>(
    gateway: &Gateway<T>,
    command: &GenerationCommand,
) -> GatewayResult<String> {
    match command {
        GenerationCommand::Generate { prompt } => gateway.generate_text(prompt).await,
        GenerationCommand::Refine { title, description } => {
            gateway
                .refine_idea(&IdeaDraft::new(title.as_str(), description.as_str()))
                .await
        }
        GenerationCommand::Combine { ideas } => {
            let drafts: Vec<IdeaDraft> = ideas
                .iter()
                .map(|idea| IdeaDraft::parse_shorthand(idea))
                .collect();
            debug!(count = drafts.len(), "Parsed ideas");
            gateway.combine_ideas(&drafts).await
        }
        GenerationCommand::Template { template, context } => {
            gateway.generate_from_template(template, context).await
        }
        GenerationCommand::Twist {
            title,
            description,
            twist,
        } => {
            gateway
                .suggest_with_twist(&IdeaDraft::new(title.as_str(), description.as_str()), twist)
                .await
        }
    }
}

fn print_text(text: &str, as_json: bool) {
    if as_json {
        println!("{}", json!({ "text": text }));
    } else {
        println!("{}", text);
    }
}

fn print_config(config: &IdeaforgeConfig, as_json: bool) {
    if as_json {
        println!("{}", json!(config));
        return;
    }

    let anthropic = &config.anthropic;
    let limits = &config.rate_limit;
    println!("[anthropic]");
    println!("endpoint = {}", anthropic.endpoint);
    println!("api_version = {}", anthropic.api_version);
    println!("model = {}", anthropic.model);
    println!("max_tokens = {}", anthropic.max_tokens);
    println!("temperature = {}", anthropic.temperature);
    println!("request_timeout_secs = {}", anthropic.request_timeout_secs);
    println!("connect_timeout_secs = {}", anthropic.connect_timeout_secs);
    println!("api_key_env = {}", anthropic.api_key_env);
    println!();
    println!("[rate_limit]");
    println!("permits_per_minute = {}", limits.permits_per_minute);
    println!("acquire_timeout_secs = {}", limits.acquire_timeout_secs);
    println!("replenish_interval_secs = {}", limits.replenish_interval_secs);
}

/// Print an error to stderr, tagged with its gateway classification.
pub fn report_error(err: &IdeaforgeError, as_json: bool) {
    let label = err.gateway_kind().map(|kind| kind.label()).unwrap_or("config");
    if as_json {
        eprintln!("{}", json!({ "error": label, "message": err.to_string() }));
    } else {
        eprintln!("error [{}]: {}", label, err);
    }
}
