//! Command-line interface.

pub mod activity;
pub mod add;
pub mod catalog;
pub mod completions;
pub mod list;
pub mod models;
pub mod output;
pub mod remove;
pub mod set;
pub mod show;
pub mod sync;

use clap::{Parser, Subcommand};

use crate::core::settings::Settings;
use crate::error::Result;

/// Talon - model switcher and encrypted API key vault for OpenClaw.
#[derive(Parser)]
#[command(
    name = "talon",
    about = "Model switcher and encrypted API key vault for OpenClaw",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// List providers, their status, and selected models
    List,

    /// Store an API key for a provider
    Add {
        /// Provider id (e.g. openai, anthropic)
        provider: String,
        /// API key (prompted for if omitted)
        api_key: Option<String>,
    },

    /// List available models for a provider
    Models {
        /// Provider id
        provider: String,
    },

    /// Select a model and sync it to OpenClaw
    Set {
        /// Provider id
        provider: String,
        /// Model name (provider default if omitted)
        model: Option<String>,
    },

    /// Show the stored API key, masked
    Show {
        /// Provider id
        provider: String,
    },

    /// Remove a provider's API key and selection
    Remove {
        /// Provider id
        provider: String,
    },

    /// Push the current selection to OpenClaw
    Sync {
        /// Provider id
        provider: String,
    },

    /// Show recent activity
    Activity {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    use Command::*;

    let settings = Settings::discover()?;

    match command {
        List => list::execute(&settings),
        Add { provider, api_key } => add::execute(&settings, &provider, api_key.as_deref()),
        Models { provider } => models::execute(&provider),
        Set { provider, model } => set::execute(&settings, &provider, model.as_deref()),
        Show { provider } => show::execute(&settings, &provider),
        Remove { provider } => remove::execute(&settings, &provider),
        Sync { provider } => sync::execute(&settings, &provider),
        Activity { limit } => activity::execute(&settings, limit),
        Completions { shell } => completions::execute(shell),
    }
}
