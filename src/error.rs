//! Error types for talon.
//!
//! The top-level [`Error`] wraps per-subsystem error enums so the CLI
//! can match on specific failures and print actionable hints.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Master key errors.
///
/// A key file that exists but cannot be used is always fatal: silently
/// generating a replacement key would orphan every stored ciphertext.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("master key unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write master key: {0}")]
    WriteFailed(std::io::Error),
}

/// Credential encryption errors.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),
}

/// On-disk store errors (vault file, selection file, activity log).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to lock store directory: {0}")]
    LockFailed(std::io::Error),
}

/// Caller-side validation failures, surfaced synchronously.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("provider id cannot be empty")]
    EmptyProvider,

    #[error("model name cannot be empty (use `talon remove` to clear a selection)")]
    EmptyModel,

    #[error("credential for {0} cannot be empty")]
    EmptyCredential(String),

    #[error("no API key stored for {0}")]
    NotConfigured(String),
}

pub type Result<T> = std::result::Result<T, Error>;
