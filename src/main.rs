//! Talon - model switcher and encrypted API key vault for OpenClaw.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use talon::cli::output;
use talon::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("TALON_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("talon=debug")
        } else {
            EnvFilter::new("talon=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            talon::error::Error::Validation(talon::error::ValidationError::UnknownProvider(
                _,
            )) => Some("run: talon list"),
            talon::error::Error::Key(talon::error::KeyError::Unavailable(_)) => {
                Some("the master key file is damaged; restore it from backup or delete it to start over (existing credentials will be lost)")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
