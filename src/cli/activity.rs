//! Activity command.
//!
//! Shows the most recent activity log entries, newest first.

use console::style;

use crate::cli::output;
use crate::core::activity::{ActivityLog, Level};
use crate::core::settings::Settings;
use crate::error::Result;

/// Show recent activity.
pub fn execute(settings: &Settings, limit: usize) -> Result<()> {
    let entries = ActivityLog::new(settings).recent(limit)?;

    if entries.is_empty() {
        output::dimmed("no activity recorded yet");
        return Ok(());
    }

    for entry in entries {
        let level = match entry.level {
            Level::Success => style(entry.level.as_str()).green(),
            Level::Warning => style(entry.level.as_str()).yellow(),
            Level::Error => style(entry.level.as_str()).red(),
            Level::Info => style(entry.level.as_str()).dim(),
        };
        println!(
            "{} [{level}] {}",
            style(&entry.timestamp).dim(),
            entry.message
        );
    }

    Ok(())
}
