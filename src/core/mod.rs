//! Core library components.

pub mod activity;
pub mod crypto;
pub mod fsio;
pub mod master_key;
pub mod selection;
pub mod settings;
pub mod sync;
pub mod vault;
