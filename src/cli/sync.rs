//! Sync command.
//!
//! Explicitly pushes the current selection for one provider into the
//! OpenClaw config.

use crate::cli::{catalog, output};
use crate::core::activity::{ActivityLog, Level};
use crate::core::selection::SelectionStore;
use crate::core::settings::Settings;
use crate::core::sync::{SyncAdapter, SyncOutcome};
use crate::core::vault::Vault;
use crate::error::{Result, ValidationError};

/// Push the stored selection for `provider` to OpenClaw.
pub fn execute(settings: &Settings, provider: &str) -> Result<()> {
    let entry = catalog::find(provider)
        .ok_or_else(|| ValidationError::UnknownProvider(provider.to_string()))?;

    let Some(credential) = Vault::new(settings).get(entry.id)? else {
        output::hint(&format!("run: talon add {} YOUR_API_KEY", entry.id));
        return Err(ValidationError::NotConfigured(entry.id.to_string()).into());
    };

    let selection = SelectionStore::new(settings).load()?;
    let model = selection.model_for(entry.id).unwrap_or(entry.default_model);

    let outcome = SyncAdapter::new(settings).push_selection(entry.id, model, Some(&credential))?;

    let log = ActivityLog::new(settings);
    match outcome {
        SyncOutcome::Applied { recovered } => {
            log.record(Level::Success, &format!("Synced to OpenClaw: {model}"));
            output::success(&format!("synced {} ({model}) to OpenClaw", entry.name));
            if recovered {
                output::warn("OpenClaw config was not valid JSON; it has been rewritten");
            }
        }
        SyncOutcome::NotFound => {
            output::warn("OpenClaw config not found; nothing synced");
        }
    }

    Ok(())
}
