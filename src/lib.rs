//! Talon - model switcher and encrypted API key vault for OpenClaw.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── catalog       # Static provider/model reference table
//! │   ├── add           # Store a provider credential
//! │   ├── set           # Select a model and sync to OpenClaw
//! │   ├── show          # Masked credential display
//! │   └── ...           # list, models, remove, sync, activity, completions
//! └── core/             # Core library components
//!     ├── settings      # Explicit path configuration, no globals
//!     ├── fsio          # Atomic writes, advisory locking, permissions
//!     ├── master_key    # Master key lifecycle
//!     ├── crypto        # XChaCha20-Poly1305 seal/open
//!     ├── vault         # Encrypted provider -> credential store
//!     ├── selection     # Provider -> selected model store
//!     ├── sync          # Merge selection into the OpenClaw config
//!     └── activity      # Append-only activity log
//! ```
//!
//! # Features
//!
//! - Per-provider API credentials encrypted at rest under a single
//!   master key with owner-only file permissions
//! - Crash-safe writes: every store mutation is write-to-temp-then-rename
//! - Selection sync into `~/.openclaw/openclaw.json` that preserves
//!   every field it does not own
//! - Append-only activity log shared with the local web console

pub mod cli;
pub mod core;
pub mod error;
