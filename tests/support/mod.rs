//! Shared test environment.

use talon::core::settings::Settings;
use tempfile::TempDir;

/// A throwaway talon home with its own OpenClaw config path.
pub struct TestEnv {
    pub tmp: TempDir,
    pub settings: Settings,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let settings = Settings::new(tmp.path().join("talon"), tmp.path().join("openclaw.json"));
        Self { tmp, settings }
    }

    /// Seed the external OpenClaw config with raw content.
    pub fn write_external(&self, contents: &str) {
        std::fs::write(&self.settings.external_config, contents)
            .expect("failed to write openclaw config");
    }

    /// Read the external OpenClaw config back as JSON.
    pub fn read_external(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(&self.settings.external_config)
            .expect("failed to read openclaw config");
        serde_json::from_str(&raw).expect("openclaw config is not valid JSON")
    }
}
