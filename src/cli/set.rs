//! Set command.
//!
//! Records the selected model for a provider and pushes it to the
//! OpenClaw config. Partial success (selection saved, no sync target)
//! is reported as such.

use tracing::info;

use crate::cli::{catalog, output};
use crate::core::activity::{ActivityLog, Level};
use crate::core::selection::SelectionStore;
use crate::core::settings::Settings;
use crate::core::sync::{SyncAdapter, SyncOutcome};
use crate::core::vault::Vault;
use crate::error::{Result, ValidationError};

/// Select a model for a provider and sync it.
pub fn execute(settings: &Settings, provider: &str, model: Option<&str>) -> Result<()> {
    let entry = catalog::find(provider)
        .ok_or_else(|| ValidationError::UnknownProvider(provider.to_string()))?;

    let Some(credential) = Vault::new(settings).get(entry.id)? else {
        output::hint(&format!("run: talon add {} YOUR_API_KEY", entry.id));
        return Err(ValidationError::NotConfigured(entry.id.to_string()).into());
    };

    let model = model.unwrap_or(entry.default_model);
    info!("setting {} model to {}", entry.id, model);

    SelectionStore::new(settings).set_model(entry.id, model)?;

    let log = ActivityLog::new(settings);
    log.record(
        Level::Success,
        &format!("Set default model to {model} ({})", entry.name),
    );

    let outcome = SyncAdapter::new(settings).push_selection(entry.id, model, Some(&credential))?;
    match outcome {
        SyncOutcome::Applied { recovered: false } => {
            log.record(Level::Success, &format!("Synced to OpenClaw: {model}"));
            output::success(&format!(
                "set {} as default (synced to OpenClaw)",
                output::key(model)
            ));
            output::dimmed("run `openclaw gateway restart` to apply changes");
        }
        SyncOutcome::Applied { recovered: true } => {
            log.record(
                Level::Warning,
                "OpenClaw config was unreadable; rewrote it from the current selection",
            );
            output::success(&format!("set {} as default", output::key(model)));
            output::warn("OpenClaw config was not valid JSON; it has been rewritten");
        }
        SyncOutcome::NotFound => {
            output::success(&format!("set {} as default", output::key(model)));
            output::dimmed("OpenClaw config not found; selection saved locally only");
        }
    }

    Ok(())
}
