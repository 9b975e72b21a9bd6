//! Master key lifecycle.
//!
//! A single 256-bit symmetric key encrypts every stored credential.
//! The key is created on first use, persisted with owner-only
//! permissions, and re-read on every operation so an externally
//! replaced key file takes effect immediately. Deleting the key file
//! permanently invalidates all existing vault entries.

use std::io::Write;

use rand::RngCore;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::settings::Settings;
use crate::error::{KeyError, Result};

/// Required key length in bytes (XChaCha20-Poly1305).
pub const KEY_LEN: usize = 32;

/// The vault master key. Bytes are zeroized on drop and never logged.
pub struct MasterKey(Zeroizing<[u8; KEY_LEN]>);

impl MasterKey {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Load the master key, generating and persisting one if absent.
    ///
    /// An existing key file is returned verbatim; if it is unreadable
    /// or has the wrong length this fails with [`KeyError::Unavailable`]
    /// rather than generating a replacement, which would silently
    /// orphan every existing ciphertext.
    ///
    /// First-use creation uses `create_new` (O_EXCL) so two racing
    /// processes cannot both persist a key: the loser re-reads the
    /// winner's file and every caller observes the same key.
    pub fn load_or_create(settings: &Settings) -> Result<Self> {
        let path = settings.master_key_file();

        match std::fs::read(&path) {
            Ok(bytes) => return Self::from_bytes(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(KeyError::Unavailable(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                ))
                .into())
            }
        }

        settings.ensure_dir()?;

        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        rand::rngs::OsRng.fill_bytes(&mut *key);

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        match options.open(&path) {
            Ok(mut file) => {
                file.write_all(&*key)
                    .and_then(|_| file.sync_all())
                    .map_err(KeyError::WriteFailed)?;
                debug!(path = %path.display(), "master key created");
                Ok(Self(key))
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                // Lost the creation race; use the winner's key.
                let bytes = std::fs::read(&path).map_err(|e| {
                    KeyError::Unavailable(format!("cannot read {}: {}", path.display(), e))
                })?;
                Self::from_bytes(bytes)
            }
            Err(e) => Err(KeyError::WriteFailed(e).into()),
        }
    }

    fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let bytes = Zeroizing::new(bytes);
        if bytes.len() != KEY_LEN {
            return Err(KeyError::Unavailable(format!(
                "master key has wrong length: {} (expected {})",
                bytes.len(),
                KEY_LEN
            ))
            .into());
        }
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        key.copy_from_slice(&bytes[..]);
        Ok(Self(key))
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MasterKey(..)")
    }
}
