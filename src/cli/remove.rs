//! Remove command.
//!
//! Deletes a provider's stored key and its model selection.

use crate::cli::{catalog, output};
use crate::core::activity::{ActivityLog, Level};
use crate::core::selection::SelectionStore;
use crate::core::settings::Settings;
use crate::core::vault::Vault;
use crate::error::{Result, ValidationError};

/// Remove a provider's credential and selection.
pub fn execute(settings: &Settings, provider: &str) -> Result<()> {
    let entry = catalog::find(provider)
        .ok_or_else(|| ValidationError::UnknownProvider(provider.to_string()))?;

    let removed_key = Vault::new(settings).remove(entry.id)?;
    let removed_selection = SelectionStore::new(settings).remove_provider(entry.id)?;

    if removed_key || removed_selection {
        ActivityLog::new(settings)
            .record(Level::Info, &format!("Removed provider: {}", entry.name));
        output::success(&format!("removed {}", output::key(entry.name)));
    } else {
        output::dimmed(&format!("{} is not configured", entry.name));
    }

    Ok(())
}
