//! List command.
//!
//! Shows every known provider, whether a key is stored, and the
//! selected model (falling back to the catalog default).

use crate::cli::{catalog, output};
use crate::core::selection::SelectionStore;
use crate::core::settings::Settings;
use crate::core::vault::Vault;
use crate::error::Result;

/// List providers and their status.
pub fn execute(settings: &Settings) -> Result<()> {
    let configured = Vault::new(settings).list()?;
    let selection = SelectionStore::new(settings).load()?;

    output::header("Providers");
    for provider in catalog::PROVIDERS {
        let has_key = configured.iter().any(|id| id == provider.id);
        let status = if has_key { "✓" } else { "✗" };
        let model = selection
            .model_for(provider.id)
            .unwrap_or(provider.default_model);
        let local = if provider.local { " (local)" } else { "" };

        println!("  {status} {:<24} {model}{local}", provider.name);
    }

    Ok(())
}
