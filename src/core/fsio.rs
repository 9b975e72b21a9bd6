//! Filesystem primitives shared by all stores.
//!
//! Every mutating store operation goes through [`write_atomic`]: the
//! new content is written to a temporary file in the target directory
//! and renamed over the destination, so a concurrent reader or a crash
//! mid-write never observes a partial file. [`StoreLock`] adds an
//! advisory lock around read-modify-write windows so two front ends
//! writing at nearly the same time cannot interleave; a dropped
//! concurrent update is tolerated, a torn file is not.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Atomically replace `path` with `contents`, mode 0600 on Unix.
///
/// The temporary file is created in the same directory as `path` so
/// the final rename stays within one filesystem.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path.parent().ok_or_else(|| StoreError::WriteFailed {
        path: path.display().to_string(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no parent"),
    })?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".talon-tmp")
        .tempfile_in(dir)
        .map_err(|source| StoreError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;

    tmp.write_all(contents)
        .and_then(|_| tmp.flush())
        .map_err(|source| StoreError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o600))
            .map_err(|source| StoreError::WriteFailed {
                path: path.display().to_string(),
                source,
            })?;
    }

    tmp.persist(path).map_err(|e| StoreError::WriteFailed {
        path: path.display().to_string(),
        source: e.error,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "atomic write");
    Ok(())
}

/// Read a file to a string, distinguishing "absent" from real failures.
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::ReadFailed {
            path: path.display().to_string(),
            source,
        }
        .into()),
    }
}

/// Advisory exclusive lock held for the duration of a read-modify-write.
///
/// Backed by a sidecar lock file; the lock is released on drop. Other
/// talon processes block until the holder finishes, which keeps two
/// concurrent writers from both reading the same pre-image.
pub struct StoreLock {
    file: File,
}

impl StoreLock {
    /// Acquire the lock, blocking until it is available.
    pub fn acquire(lock_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(lock_path)
            .map_err(StoreError::LockFailed)?;
        file.lock_exclusive().map_err(StoreError::LockFailed)?;
        debug!(path = %lock_path.display(), "store lock acquired");
        Ok(Self { file })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.json");

        write_atomic(&path, b"{}").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.json");

        write_atomic(&path, b"old").unwrap();
        write_atomic(&path, b"new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_stray_temp_file_does_not_affect_target() {
        // Simulates a crash after the temp file was written but before
        // the rename: the target must be untouched.
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.json");
        write_atomic(&path, b"original").unwrap();

        std::fs::write(tmp.path().join(".talon-tmp-abandoned"), b"half-writ").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_sets_owner_only_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("secret.enc");
        write_atomic(&path, b"data").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_read_if_exists_absent() {
        let tmp = TempDir::new().unwrap();
        assert!(read_if_exists(&tmp.path().join("missing")).unwrap().is_none());
    }

    #[test]
    fn test_lock_acquire_and_release() {
        let tmp = TempDir::new().unwrap();
        let lock_path = tmp.path().join(".lock");

        let guard = StoreLock::acquire(&lock_path).unwrap();
        drop(guard);
        // Re-acquirable after release.
        let _guard = StoreLock::acquire(&lock_path).unwrap();
    }
}
