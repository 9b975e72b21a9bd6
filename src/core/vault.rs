//! Encrypted provider -> credential store.
//!
//! The vault file (`keys.enc`) is a JSON object mapping provider ids to
//! base64 ciphertexts. Every mutation is an atomic read-modify-write
//! under the store lock; the master key is read fresh on each
//! operation so an externally replaced key file takes effect
//! immediately.
//!
//! Provider ids are opaque strings here; membership in the provider
//! catalog is validated by the caller.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::core::crypto;
use crate::core::fsio::{self, StoreLock};
use crate::core::master_key::MasterKey;
use crate::core::settings::Settings;
use crate::error::{Result, ValidationError};

/// Reveal thresholds for [`mask`]: anything at or below the minimum
/// length shows only the redaction marker.
const MASK_MIN_LEN: usize = 12;
const MASK_PREFIX: usize = 8;
const MASK_SUFFIX: usize = 4;

/// Encrypted credential store backed by `keys.enc`.
pub struct Vault<'a> {
    settings: &'a Settings,
}

impl<'a> Vault<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Encrypt and store a credential, overwriting any existing entry.
    pub fn put(&self, provider: &str, credential: &str) -> Result<()> {
        if provider.is_empty() {
            return Err(ValidationError::EmptyProvider.into());
        }
        if credential.is_empty() {
            return Err(ValidationError::EmptyCredential(provider.to_string()).into());
        }

        self.settings.ensure_dir()?;
        let _lock = StoreLock::acquire(&self.settings.lock_file())?;

        let key = MasterKey::load_or_create(self.settings)?;
        let sealed = crypto::seal(&key, credential)?;

        let mut entries = self.load_entries()?;
        entries.insert(provider.to_string(), sealed);
        self.save_entries(&entries)?;

        debug!(provider, "credential stored");
        Ok(())
    }

    /// Decrypt and return a credential.
    ///
    /// A per-entry decryption failure (replaced master key, corrupted
    /// ciphertext) degrades that entry to `None`; it never prevents
    /// access to other entries.
    pub fn get(&self, provider: &str) -> Result<Option<String>> {
        let entries = self.load_entries()?;
        let Some(sealed) = entries.get(provider) else {
            return Ok(None);
        };

        let key = MasterKey::load_or_create(self.settings)?;
        match crypto::open(&key, sealed) {
            Ok(plaintext) => Ok(Some(plaintext)),
            Err(e) => {
                warn!(provider, "treating undecryptable vault entry as absent: {e}");
                Ok(None)
            }
        }
    }

    /// Remove a credential. Returns `true` if an entry was deleted.
    pub fn remove(&self, provider: &str) -> Result<bool> {
        self.settings.ensure_dir()?;
        let _lock = StoreLock::acquire(&self.settings.lock_file())?;

        let mut entries = self.load_entries()?;
        if entries.remove(provider).is_none() {
            return Ok(false);
        }
        self.save_entries(&entries)?;

        debug!(provider, "credential removed");
        Ok(true)
    }

    /// Provider ids with a stored entry, without decrypting anything.
    pub fn list(&self) -> Result<Vec<String>> {
        Ok(self.load_entries()?.into_keys().collect())
    }

    /// Partially redacted credential for display.
    pub fn masked(&self, provider: &str) -> Result<Option<String>> {
        Ok(self.get(provider)?.map(|credential| mask(&credential)))
    }

    /// Read the vault file into a map.
    ///
    /// Absent and malformed files both read as empty: the data in a
    /// malformed file was already unusable, and the next successful
    /// write replaces it.
    fn load_entries(&self) -> Result<BTreeMap<String, String>> {
        let path = self.settings.keys_file();
        let Some(contents) = fsio::read_if_exists(&path)? else {
            return Ok(BTreeMap::new());
        };

        match serde_json::from_str(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %path.display(), "vault file is not valid JSON, treating as empty: {e}");
                Ok(BTreeMap::new())
            }
        }
    }

    fn save_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        fsio::write_atomic(&self.settings.keys_file(), format!("{json}\n").as_bytes())
    }
}

/// Redact a credential for display: first 8 and last 4 characters with
/// a marker between them, or `***` when the credential is too short to
/// reveal anything safely.
pub fn mask(credential: &str) -> String {
    let chars: Vec<char> = credential.chars().collect();
    if chars.len() > MASK_MIN_LEN {
        let prefix: String = chars[..MASK_PREFIX].iter().collect();
        let suffix: String = chars[chars.len() - MASK_SUFFIX..].iter().collect();
        format!("{prefix}...{suffix}")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_settings(tmp: &TempDir) -> Settings {
        Settings::new(tmp.path().join("talon"), tmp.path().join("oc.json"))
    }

    #[test]
    fn test_put_get_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let settings = test_settings(&tmp);
        let vault = Vault::new(&settings);

        vault.put("openai", "sk-test-12345").unwrap();
        assert_eq!(vault.get("openai").unwrap().as_deref(), Some("sk-test-12345"));
    }

    #[test]
    fn test_get_absent_provider() {
        let tmp = TempDir::new().unwrap();
        let settings = test_settings(&tmp);
        let vault = Vault::new(&settings);

        assert_eq!(vault.get("nope").unwrap(), None);
    }

    #[test]
    fn test_put_overwrites() {
        let tmp = TempDir::new().unwrap();
        let settings = test_settings(&tmp);
        let vault = Vault::new(&settings);

        vault.put("openai", "old").unwrap();
        vault.put("openai", "new").unwrap();
        assert_eq!(vault.get("openai").unwrap().as_deref(), Some("new"));
        assert_eq!(vault.list().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_credential_rejected() {
        let tmp = TempDir::new().unwrap();
        let settings = test_settings(&tmp);
        let vault = Vault::new(&settings);

        assert!(vault.put("openai", "").is_err());
        assert!(vault.put("", "value").is_err());
    }

    #[test]
    fn test_remove() {
        let tmp = TempDir::new().unwrap();
        let settings = test_settings(&tmp);
        let vault = Vault::new(&settings);

        vault.put("openai", "sk-1").unwrap();
        assert!(vault.remove("openai").unwrap());
        assert!(!vault.remove("openai").unwrap());
        assert_eq!(vault.get("openai").unwrap(), None);
    }

    #[test]
    fn test_list_does_not_require_decryption() {
        let tmp = TempDir::new().unwrap();
        let settings = test_settings(&tmp);
        let vault = Vault::new(&settings);

        vault.put("openai", "sk-1").unwrap();
        vault.put("anthropic", "sk-2").unwrap();

        // Even with the master key gone, list still works.
        std::fs::remove_file(settings.master_key_file()).unwrap();
        let mut ids = vault.list().unwrap();
        ids.sort();
        assert_eq!(ids, vec!["anthropic", "openai"]);
    }

    #[test]
    fn test_plaintext_never_written_to_disk() {
        let tmp = TempDir::new().unwrap();
        let settings = test_settings(&tmp);
        let vault = Vault::new(&settings);

        let credential = r#"sk-"quoted\weird{json}chars"#;
        vault.put("openai", credential).unwrap();

        let raw = std::fs::read_to_string(settings.keys_file()).unwrap();
        assert!(!raw.contains(credential));
        assert!(!raw.contains("quoted"));
    }

    #[test]
    fn test_corrupted_entry_degrades_to_absent() {
        let tmp = TempDir::new().unwrap();
        let settings = test_settings(&tmp);
        let vault = Vault::new(&settings);

        vault.put("openai", "sk-1").unwrap();
        vault.put("anthropic", "sk-2").unwrap();

        // Truncate one ciphertext in place.
        let raw = std::fs::read_to_string(settings.keys_file()).unwrap();
        let mut entries: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        let sealed = entries.get_mut("openai").unwrap();
        sealed.truncate(8);
        std::fs::write(settings.keys_file(), serde_json::to_string(&entries).unwrap()).unwrap();

        assert_eq!(vault.get("openai").unwrap(), None);
        assert_eq!(vault.get("anthropic").unwrap().as_deref(), Some("sk-2"));
        assert_eq!(vault.list().unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_vault_file_reads_as_empty() {
        let tmp = TempDir::new().unwrap();
        let settings = test_settings(&tmp);
        settings.ensure_dir().unwrap();
        std::fs::write(settings.keys_file(), "{not json").unwrap();

        let vault = Vault::new(&settings);
        assert!(vault.list().unwrap().is_empty());

        // Next write replaces the corruption.
        vault.put("openai", "sk-1").unwrap();
        assert_eq!(vault.get("openai").unwrap().as_deref(), Some("sk-1"));
    }

    #[test]
    fn test_mask_long_credential() {
        assert_eq!(mask("sk-ABCDEFGHIJKLMNOP"), "sk-ABCDE...MNOP");
    }

    #[test]
    fn test_mask_short_credential_reveals_nothing() {
        assert_eq!(mask("abc123"), "***");
        assert_eq!(mask(""), "***");
        // Exactly at the threshold still hides everything.
        assert_eq!(mask("123456789012"), "***");
    }
}
