//! Models command.
//!
//! Lists the catalog models for one provider.

use crate::cli::{catalog, output};
use crate::error::{Result, ValidationError};

/// List models for a provider.
pub fn execute(provider: &str) -> Result<()> {
    let entry = catalog::find(provider)
        .ok_or_else(|| ValidationError::UnknownProvider(provider.to_string()))?;

    output::header(&format!("Models for {}", entry.name));
    for model in entry.models {
        if *model == entry.default_model {
            output::list_item(&format!("{model} (default)"));
        } else {
            output::list_item(model);
        }
    }

    Ok(())
}
