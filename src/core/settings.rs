//! Path configuration.
//!
//! All on-disk locations are resolved once at process start into a
//! [`Settings`] value that is passed by reference into every component.
//! No component reads ambient global state, so tests and alternate
//! front ends can point talon at any directory.

use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

/// Environment variable overriding the talon config directory.
pub const CONFIG_DIR_ENV: &str = "TALON_CONFIG_DIR";

/// Environment variable overriding the OpenClaw config path.
pub const OPENCLAW_CONFIG_ENV: &str = "TALON_OPENCLAW_CONFIG";

/// Resolved file locations for all talon stores.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the vault, selection config, master key, and log.
    pub config_dir: PathBuf,
    /// The externally-owned OpenClaw configuration file.
    pub external_config: PathBuf,
}

impl Settings {
    /// Build settings from explicit paths (used by tests and the web console).
    pub fn new(config_dir: impl Into<PathBuf>, external_config: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            external_config: external_config.into(),
        }
    }

    /// Resolve default locations, honoring env overrides.
    ///
    /// The config directory defaults to the platform config dir plus
    /// `talon` (`~/.config/talon` on Linux). The external config
    /// defaults to `~/.openclaw/openclaw.json`.
    pub fn discover() -> Result<Self> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or_else(|| StoreError::ReadFailed {
                    path: "config directory".to_string(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "unable to determine platform config directory",
                    ),
                })?
                .join("talon"),
        };

        let external_config = match std::env::var_os(OPENCLAW_CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".openclaw")
                .join("openclaw.json"),
        };

        Ok(Self {
            config_dir,
            external_config,
        })
    }

    /// Encrypted vault file (provider id -> base64 ciphertext).
    pub fn keys_file(&self) -> PathBuf {
        self.config_dir.join("keys.enc")
    }

    /// Master key file (opaque binary key material).
    pub fn master_key_file(&self) -> PathBuf {
        self.config_dir.join(".master.key")
    }

    /// Selection config file (`selected_models` plus preserved extras).
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Append-only activity log.
    pub fn activity_log(&self) -> PathBuf {
        self.config_dir.join("activity.log")
    }

    /// Sidecar lock file guarding read-modify-write windows.
    pub fn lock_file(&self) -> PathBuf {
        self.config_dir.join(".lock")
    }

    /// Create the config directory with owner-only permissions.
    pub fn ensure_dir(&self) -> Result<()> {
        ensure_private_dir(&self.config_dir)
    }
}

/// Create `dir` (and parents) and restrict it to 0700 on Unix.
pub fn ensure_private_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| StoreError::WriteFailed {
        path: dir.display().to_string(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o700)).map_err(
            |source| StoreError::WriteFailed {
                path: dir.display().to_string(),
                source,
            },
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_paths_live_under_config_dir() {
        let settings = Settings::new("/tmp/talon-test", "/tmp/openclaw.json");
        assert_eq!(
            settings.keys_file(),
            PathBuf::from("/tmp/talon-test/keys.enc")
        );
        assert_eq!(
            settings.master_key_file(),
            PathBuf::from("/tmp/talon-test/.master.key")
        );
        assert_eq!(
            settings.config_file(),
            PathBuf::from("/tmp/talon-test/config.json")
        );
        assert_eq!(
            settings.activity_log(),
            PathBuf::from("/tmp/talon-test/activity.log")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_dir_sets_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let settings = Settings::new(tmp.path().join("talon"), tmp.path().join("oc.json"));
        settings.ensure_dir().unwrap();

        let mode = std::fs::metadata(&settings.config_dir)
            .unwrap()
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o700);
    }
}
