//! Provider -> selected model store.
//!
//! `config.json` holds the user's chosen model per provider under
//! `selected_models`. Unknown top-level keys are captured into an
//! explicit extras map on read and written back unchanged, so repeated
//! read-modify-write cycles never silently drop fields other front
//! ends may have added.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::fsio::{self, StoreLock};
use crate::core::settings::Settings;
use crate::error::{Result, ValidationError};

/// The selection document: managed fields plus preserved extras.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Provider id -> selected model name.
    #[serde(default)]
    pub selected_models: BTreeMap<String, String>,

    /// Top-level fields this store does not manage but must round-trip.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SelectionConfig {
    /// Selected model for a provider, if any.
    pub fn model_for(&self, provider: &str) -> Option<&str> {
        self.selected_models.get(provider).map(String::as_str)
    }
}

/// Store for the selection document.
pub struct SelectionStore<'a> {
    settings: &'a Settings,
}

impl<'a> SelectionStore<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Read the selection document.
    ///
    /// Absent and malformed files both read as an empty document; the
    /// next successful write replaces any corruption.
    pub fn load(&self) -> Result<SelectionConfig> {
        let path = self.settings.config_file();
        let Some(contents) = fsio::read_if_exists(&path)? else {
            return Ok(SelectionConfig::default());
        };

        match serde_json::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(path = %path.display(), "selection config is not valid JSON, treating as empty: {e}");
                Ok(SelectionConfig::default())
            }
        }
    }

    /// Record the selected model for a provider.
    ///
    /// An empty model name is rejected rather than treated as a clear;
    /// clearing is only via [`remove_provider`](Self::remove_provider).
    pub fn set_model(&self, provider: &str, model: &str) -> Result<()> {
        if provider.is_empty() {
            return Err(ValidationError::EmptyProvider.into());
        }
        if model.is_empty() {
            return Err(ValidationError::EmptyModel.into());
        }

        self.settings.ensure_dir()?;
        let _lock = StoreLock::acquire(&self.settings.lock_file())?;

        let mut config = self.load()?;
        config
            .selected_models
            .insert(provider.to_string(), model.to_string());
        self.save(&config)?;

        debug!(provider, model, "selection updated");
        Ok(())
    }

    /// Drop a provider's selection. Returns `true` if one was removed.
    pub fn remove_provider(&self, provider: &str) -> Result<bool> {
        self.settings.ensure_dir()?;
        let _lock = StoreLock::acquire(&self.settings.lock_file())?;

        let mut config = self.load()?;
        if config.selected_models.remove(provider).is_none() {
            return Ok(false);
        }
        self.save(&config)?;

        debug!(provider, "selection removed");
        Ok(true)
    }

    fn save(&self, config: &SelectionConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fsio::write_atomic(&self.settings.config_file(), format!("{json}\n").as_bytes())
    }
}
