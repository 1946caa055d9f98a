//! Flow tuning loaded from the shared config directory
//!
//! Hosts can override the lookup timeout or cap the retry sub-flow via
//! ~/.config/signet/signin-flow.json. Absent file or fields fall back to
//! defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::flow::MANAGEMENT_LOOKUP_TIMEOUT_MS;

/// Settings filename in the Signet config directory
const SETTINGS_FILE: &str = "signin-flow.json";

/// Tuning knobs for the account-switch confirmation flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowSettings {
    /// How long to wait on the managed-account lookup before offering retry
    pub management_lookup_timeout_ms: u64,
    /// Maximum user-mediated retries; None leaves retries unbounded
    pub max_lookup_retries: Option<u32>,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            management_lookup_timeout_ms: MANAGEMENT_LOOKUP_TIMEOUT_MS,
            max_lookup_retries: None,
        }
    }
}

impl FlowSettings {
    /// Load settings from ~/.config/signet/signin-flow.json
    ///
    /// Returns defaults when the file does not exist; a file that exists but
    /// does not parse is an error.
    pub fn load() -> Result<Self> {
        config::load_json_or_default(SETTINGS_FILE)
    }

    /// Load settings from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = FlowSettings::default();
        assert_eq!(settings.management_lookup_timeout_ms, 30_000);
        assert_eq!(settings.max_lookup_retries, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = FlowSettings::from_json(r#"{"max_lookup_retries": 3}"#).unwrap();
        assert_eq!(settings.management_lookup_timeout_ms, 30_000);
        assert_eq!(settings.max_lookup_retries, Some(3));
    }

    #[test]
    fn test_full_json() {
        let settings = FlowSettings::from_json(
            r#"{"management_lookup_timeout_ms": 5000, "max_lookup_retries": 1}"#,
        )
        .unwrap();
        assert_eq!(settings.management_lookup_timeout_ms, 5000);
        assert_eq!(settings.max_lookup_retries, Some(1));
    }

    #[test]
    fn test_invalid_json() {
        assert!(FlowSettings::from_json("not json").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signin-flow.json");
        std::fs::write(&path, r#"{"management_lookup_timeout_ms": 1000}"#).unwrap();

        let settings = FlowSettings::from_file(&path).unwrap();
        assert_eq!(settings.management_lookup_timeout_ms, 1000);
        assert_eq!(settings.max_lookup_retries, None);
    }
}
