//! Show command.
//!
//! Displays the stored API key in masked form only; the plaintext is
//! never printed.

use crate::cli::{catalog, output};
use crate::core::settings::Settings;
use crate::core::vault::Vault;
use crate::error::{Result, ValidationError};

/// Show the masked key for a provider.
pub fn execute(settings: &Settings, provider: &str) -> Result<()> {
    let entry = catalog::find(provider)
        .ok_or_else(|| ValidationError::UnknownProvider(provider.to_string()))?;

    match Vault::new(settings).masked(entry.id)? {
        Some(masked) => println!("{}: {masked}", entry.name),
        None => output::dimmed(&format!("{}: no key stored", entry.name)),
    }

    Ok(())
}
