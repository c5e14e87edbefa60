use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GuardError, GuardResult};
use crate::types::PreferenceValue;

pub const GUARD_CONFIG_FILENAME: &str = "theme-guard.json";
pub const GUARD_CONFIG_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    pub version: String,
    /// Title used for every notice the guard shows.
    pub title: String,
    /// Themes that require a license to activate.
    pub restricted: Vec<PreferenceValue>,
    /// Appended to the "license required" notice.
    pub license_guidance: String,
    #[serde(default)]
    pub unknown_baseline: UnknownBaselinePolicy,
}

/// What to do when a restricted theme is denied before any theme was approved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownBaselinePolicy {
    /// Show a warning notice asking the user to recover manually.
    #[default]
    Warn,
    /// Only log; the user sees nothing.
    Silent,
}

impl GuardConfig {
    pub fn default_new() -> Self {
        Self {
            version: GUARD_CONFIG_VERSION.to_string(),
            title: "Dark Themes".to_string(),
            restricted: vec![PreferenceValue::from("Gruvbox")],
            license_guidance: "Please contact JetBrains for a pro license.".to_string(),
            unknown_baseline: UnknownBaselinePolicy::Warn,
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::default_new()
    }
}

pub fn load_or_create_guard_config(dir: &Path) -> GuardResult<GuardConfig> {
    std::fs::create_dir_all(dir).map_err(|error| {
        GuardError::Config(format!(
            "failed to create config directory {}: {error}",
            dir.display()
        ))
    })?;

    let path = guard_config_path(dir);
    if !path.exists() {
        let config = GuardConfig::default_new();
        write_guard_config(&path, &config)?;
        return Ok(config);
    }

    let data = std::fs::read_to_string(&path).map_err(|error| {
        GuardError::Config(format!(
            "failed to read guard config {}: {error}",
            path.display()
        ))
    })?;
    let config: GuardConfig = serde_json::from_str(&data).map_err(|error| {
        GuardError::Config(format!(
            "failed to parse guard config {}: {error}",
            path.display()
        ))
    })?;

    if config.version != GUARD_CONFIG_VERSION {
        return Err(GuardError::Config(format!(
            "unsupported guard config version {} in {}",
            config.version,
            path.display()
        )));
    }

    Ok(config)
}

pub fn guard_config_path(dir: &Path) -> PathBuf {
    dir.join(GUARD_CONFIG_FILENAME)
}

pub fn write_guard_config(path: &Path, config: &GuardConfig) -> GuardResult<()> {
    let data = serde_json::to_string_pretty(config).map_err(|error| {
        GuardError::Config(format!(
            "failed to serialize guard config {}: {error}",
            path.display()
        ))
    })?;
    std::fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_config_when_missing() {
        let dir = tempdir().expect("tempdir");
        let config = load_or_create_guard_config(dir.path()).expect("load/create");

        assert!(guard_config_path(dir.path()).exists());
        assert_eq!(config.version, GUARD_CONFIG_VERSION);
        assert_eq!(config.restricted, vec![PreferenceValue::from("Gruvbox")]);
        assert_eq!(config.unknown_baseline, UnknownBaselinePolicy::Warn);
    }

    #[test]
    fn loads_existing_config() {
        let dir = tempdir().expect("tempdir");
        let mut original = GuardConfig::default_new();
        original.restricted.push(PreferenceValue::from("Nord"));
        original.unknown_baseline = UnknownBaselinePolicy::Silent;
        write_guard_config(&guard_config_path(dir.path()), &original).expect("write config");

        let loaded = load_or_create_guard_config(dir.path()).expect("load config");
        assert_eq!(loaded.restricted.len(), 2);
        assert_eq!(loaded.unknown_baseline, UnknownBaselinePolicy::Silent);
    }

    #[test]
    fn missing_policy_defaults_to_warn() {
        let dir = tempdir().expect("tempdir");
        let raw = r#"{
            "version": "1.0.0",
            "title": "Dark Themes",
            "restricted": ["Gruvbox"],
            "license_guidance": "Buy one."
        }"#;
        std::fs::write(guard_config_path(dir.path()), raw).expect("write raw");

        let loaded = load_or_create_guard_config(dir.path()).expect("load config");
        assert_eq!(loaded.unknown_baseline, UnknownBaselinePolicy::Warn);
        assert_eq!(loaded.license_guidance, "Buy one.");
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let mut original = GuardConfig::default_new();
        original.version = "0.9.0".to_string();
        write_guard_config(&guard_config_path(dir.path()), &original).expect("write config");

        let err = load_or_create_guard_config(dir.path()).expect_err("expected error");
        match err {
            GuardError::Config(message) => assert!(message.contains("0.9.0")),
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn malformed_config_is_rejected() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(guard_config_path(dir.path()), "{not json").expect("write raw");

        let err = load_or_create_guard_config(dir.path()).expect_err("expected error");
        assert!(matches!(err, GuardError::Config(_)));
    }
}
