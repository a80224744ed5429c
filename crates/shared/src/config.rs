//! Configuration types for the parts store

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_RESET_TIMEOUT_MS: u64 = 30_000;

fn default_reset_timeout_ms() -> Option<u64> {
    Some(DEFAULT_RESET_TIMEOUT_MS)
}

/// Store configuration (partstore.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// How long a reset waits for the active transaction.
    /// `null` waits forever.
    #[serde(default = "default_reset_timeout_ms")]
    pub reset_timeout_ms: Option<u64>,

    /// Restore id counters along with the collections on rollback
    #[serde(default)]
    pub restore_counters_on_rollback: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            reset_timeout_ms: default_reset_timeout_ms(),
            restore_counters_on_rollback: false,
        }
    }
}

impl StoreConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder: set the reset timeout
    ///
    /// Durations past `u64::MAX` milliseconds saturate. A timeout that rounds
    /// down to zero milliseconds is rejected, as it is when loaded from a file.
    pub fn with_reset_timeout(mut self, timeout: Option<Duration>) -> crate::Result<Self> {
        self.reset_timeout_ms = timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX));
        self.validate()?;
        Ok(self)
    }

    /// Builder: restore counters on rollback
    pub fn with_restore_counters_on_rollback(mut self, restore: bool) -> Self {
        self.restore_counters_on_rollback = restore;
        self
    }

    /// Reset wait bound, `None` for unbounded
    pub fn reset_timeout(&self) -> Option<Duration> {
        self.reset_timeout_ms.map(Duration::from_millis)
    }

    fn validate(&self) -> crate::Result<()> {
        if self.reset_timeout_ms == Some(0) {
            return Err(crate::StoreError::Config(
                "resetTimeoutMs must be positive or null".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.reset_timeout(), Some(Duration::from_secs(30)));
        assert!(!config.restore_counters_on_rollback);
    }

    #[test]
    fn test_config_null_timeout_waits_forever() {
        let json = r#"{ "resetTimeoutMs": null, "restoreCountersOnRollback": true }"#;

        let config: StoreConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.reset_timeout(), None);
        assert!(config.restore_counters_on_rollback);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "resetTimeoutMs": 250 }}"#).unwrap();

        let config = StoreConfig::from_file(file.path()).unwrap();
        assert_eq!(config.reset_timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_config_rejects_zero_timeout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "resetTimeoutMs": 0 }}"#).unwrap();

        let err = StoreConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, crate::StoreError::Config(_)));
    }

    #[test]
    fn test_config_builders() {
        let config = StoreConfig::default()
            .with_reset_timeout(None)
            .unwrap()
            .with_restore_counters_on_rollback(true);

        assert_eq!(config.reset_timeout_ms, None);
        assert!(config.restore_counters_on_rollback);
    }

    #[test]
    fn test_config_builder_rejects_zero_timeout() {
        let err = StoreConfig::default()
            .with_reset_timeout(Some(Duration::ZERO))
            .unwrap_err();
        assert!(matches!(err, crate::StoreError::Config(_)));

        // Sub-millisecond timeouts round down to zero
        assert!(StoreConfig::default()
            .with_reset_timeout(Some(Duration::from_micros(500)))
            .is_err());
    }

    #[test]
    fn test_config_builder_saturates_huge_timeout() {
        let config = StoreConfig::default()
            .with_reset_timeout(Some(Duration::MAX))
            .unwrap();
        assert_eq!(config.reset_timeout_ms, Some(u64::MAX));
    }
}
