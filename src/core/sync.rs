//! Selection sync into the OpenClaw configuration.
//!
//! Merges a chosen (provider, model, credential) triple into the
//! externally-owned `openclaw.json`. The adapter manages exactly three
//! things: the top-level `model` and `defaultModel` fields and one
//! entry under `models.providers`; every other field round-trips
//! untouched, including key order (serde_json is built with
//! `preserve_order`). Pushing the same arguments twice writes a
//! byte-identical file the second time.

use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::core::fsio::{self, StoreLock};
use crate::core::settings::Settings;
use crate::error::{Result, ValidationError};

/// Result of a sync push.
///
/// `NotFound` is an expected steady state (no downstream consumer
/// configured), not a failure. `recovered` reports that the existing
/// file failed to parse and the merge started from an empty object, so
/// the caller can surface the data-loss risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Applied { recovered: bool },
    NotFound,
}

/// Adapter writing selections into the external OpenClaw config.
pub struct SyncAdapter<'a> {
    settings: &'a Settings,
}

impl<'a> SyncAdapter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Merge the active selection into the OpenClaw config file.
    ///
    /// The file is never created when absent; its absence is reported
    /// as [`SyncOutcome::NotFound`] with no changes made.
    pub fn push_selection(
        &self,
        provider: &str,
        model: &str,
        credential: Option<&str>,
    ) -> Result<SyncOutcome> {
        if provider.is_empty() {
            return Err(ValidationError::EmptyProvider.into());
        }
        if model.is_empty() {
            return Err(ValidationError::EmptyModel.into());
        }

        let path = &self.settings.external_config;
        self.settings.ensure_dir()?;
        let _lock = StoreLock::acquire(&self.settings.lock_file())?;

        let Some(contents) = fsio::read_if_exists(path)? else {
            debug!(path = %path.display(), "openclaw config absent, nothing to sync");
            return Ok(SyncOutcome::NotFound);
        };

        let (mut doc, recovered) = match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => (map, false),
            Ok(other) => {
                warn!(path = %path.display(), "openclaw config is not a JSON object ({}), merging into an empty one", json_kind(&other));
                (Map::new(), true)
            }
            Err(e) => {
                warn!(path = %path.display(), "openclaw config is unparsable, merging into an empty one: {e}");
                (Map::new(), true)
            }
        };

        // Both spellings, for consumers reading either key.
        doc.insert("defaultModel".to_string(), Value::String(model.to_string()));
        doc.insert("model".to_string(), Value::String(model.to_string()));

        if let Some(credential) = credential {
            let providers = nested_object(&mut doc, "models", "providers");
            providers.insert(
                format!("{provider}:default"),
                json!({
                    "provider": provider,
                    "model": model,
                    "apiKey": credential,
                }),
            );
        }

        let rendered = serde_json::to_string_pretty(&Value::Object(doc))?;
        fsio::write_atomic(path, format!("{rendered}\n").as_bytes())?;

        debug!(provider, model, recovered, "selection synced to openclaw");
        Ok(SyncOutcome::Applied { recovered })
    }
}

/// Get `doc[outer][inner]` as a mutable object, creating intermediate
/// objects if absent. A non-object value already at either level is
/// replaced (the shape is ours to manage).
fn nested_object<'m>(
    doc: &'m mut Map<String, Value>,
    outer: &str,
    inner: &str,
) -> &'m mut Map<String, Value> {
    let outer_map = ensure_object(doc, outer);
    ensure_object(outer_map, inner)
}

/// Get `map[key]` as a mutable object, creating or replacing it first
/// if it is absent or holds a non-object value.
fn ensure_object<'m>(map: &'m mut Map<String, Value>, key: &str) -> &'m mut Map<String, Value> {
    let slot = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        warn!("replacing non-object `{key}` field in openclaw config");
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(obj) => obj,
        // Just forced to an object above.
        _ => unreachable!(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
