//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ideaforge - rate-limited idea generation against a hosted language model
#[derive(Parser, Debug)]
#[command(name = "ideaforge")]
#[command(about = "Rate-limited idea generation against a hosted language model", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs and results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Extra configuration file layered over the defaults
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective configuration (the API key is never shown)
    Config,

    /// Commands that call the provider
    #[command(flatten)]
    Generation(GenerationCommand),
}

/// Commands that spend a permit and call the provider
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum GenerationCommand {
    /// Send a free-form prompt
    Generate {
        /// Prompt text
        prompt: String,
    },

    /// Refine an existing idea
    Refine {
        /// Idea title
        #[arg(long)]
        title: String,

        /// Idea description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Combine two or more ideas into one
    Combine {
        /// An idea as "title: description" (repeat for each idea)
        #[arg(long = "idea", value_name = "IDEA", required = true)]
        ideas: Vec<String>,
    },

    /// Generate an idea from a template and context
    Template {
        /// Template text
        #[arg(long)]
        template: String,

        /// Context the template is filled from
        #[arg(long, default_value = "")]
        context: String,
    },

    /// Suggest a variation of an idea under an extra constraint
    Twist {
        /// Idea title
        #[arg(long)]
        title: String,

        /// Idea description
        #[arg(long, default_value = "")]
        description: String,

        /// Constraint to apply
        #[arg(long)]
        twist: String,
    },
}
