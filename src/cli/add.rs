//! Add command.
//!
//! Store a provider API key, prompting with hidden input when the key
//! is not given on the command line.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::info;

use crate::cli::{catalog, output};
use crate::core::activity::{ActivityLog, Level};
use crate::core::settings::Settings;
use crate::core::vault::Vault;
use crate::error::{Result, ValidationError};

/// Add or update an API key.
pub fn execute(settings: &Settings, provider: &str, api_key: Option<&str>) -> Result<()> {
    let entry = catalog::find(provider)
        .ok_or_else(|| ValidationError::UnknownProvider(provider.to_string()))?;

    if entry.local {
        output::dimmed(&format!("{} runs locally; a key is still stored as given", entry.name));
    }

    info!("adding key for {}", entry.id);

    let value = match api_key {
        Some(key) => key.to_string(),
        None if !io::stdin().is_terminal() => {
            // Piped input
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            input.trim().to_string()
        }
        None => Password::new()
            .with_prompt(format!("API key for {}", output::key(entry.name)))
            .interact()
            .map_err(|e| std::io::Error::other(e.to_string()))?,
    };

    if value.is_empty() {
        return Err(ValidationError::EmptyCredential(entry.id.to_string()).into());
    }

    Vault::new(settings).put(entry.id, &value)?;

    ActivityLog::new(settings).record(Level::Success, &format!("Added provider: {}", entry.name));
    output::success(&format!("added {}", output::key(entry.name)));

    if let Some(url) = entry.billing_url {
        output::dimmed(&format!("usage dashboard: {url}"));
    }

    Ok(())
}
