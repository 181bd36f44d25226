//! # Spawn Configuration
//!
//! Loaded once from TOML, then handed to a [`crate::Spawner`].
//!
//! ```toml
//! thread_name_prefix = "tandem-worker"
//! stack_size = 262144
//! ```
//!
//! Both keys are optional. Missing keys fall back to the OS defaults and
//! unnamed threads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

/// Thread creation settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpawnConfig {
    /// Thread name prefix. Fan-out units are named `{prefix}-{index}`.
    pub thread_name_prefix: Option<String>,
    /// Stack size in bytes for every spawned thread.
    pub stack_size: Option<usize>,
}

impl SpawnConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> SyncResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| SyncError::Config(format!("malformed TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> SyncResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SyncError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Rejects settings no thread could be created with.
    pub fn validate(&self) -> SyncResult<()> {
        if self.stack_size == Some(0) {
            return Err(SyncError::Config("stack_size must be non-zero".to_string()));
        }
        if let Some(prefix) = &self.thread_name_prefix {
            if prefix.is_empty() {
                return Err(SyncError::Config(
                    "thread_name_prefix must not be empty".to_string(),
                ));
            }
            if prefix.contains('\0') {
                return Err(SyncError::Config(
                    "thread_name_prefix must not contain NUL".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Thread name for a single spawn (`None`) or fan-out unit `Some(index)`.
    #[must_use]
    pub fn thread_name(&self, index: Option<u64>) -> Option<String> {
        let prefix = self.thread_name_prefix.as_deref()?;
        Some(match index {
            Some(i) => format!("{prefix}-{i}"),
            None => prefix.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config_path() -> PathBuf {
        let id = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("test_spawn_config_{id}.toml"))
    }

    #[test]
    fn test_parse_full() {
        let config = SpawnConfig::from_toml_str(
            "thread_name_prefix = \"tandem-worker\"\nstack_size = 262144\n",
        )
        .unwrap();

        assert_eq!(config.thread_name_prefix.as_deref(), Some("tandem-worker"));
        assert_eq!(config.stack_size, Some(262_144));
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = SpawnConfig::from_toml_str("").unwrap();
        assert_eq!(config, SpawnConfig::default());
        assert_eq!(config.thread_name(Some(3)), None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SpawnConfig::from_toml_str("max_threads = 4\n").unwrap_err();
        assert!(matches!(err, SyncError::Config(_)));
        assert!(err.to_string().contains("malformed TOML"));
    }

    #[test]
    fn test_zero_stack_rejected() {
        let err = SpawnConfig::from_toml_str("stack_size = 0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid spawn configuration: stack_size must be non-zero"
        );
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let config = SpawnConfig {
            thread_name_prefix: Some(String::new()),
            stack_size: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_thread_names() {
        let config = SpawnConfig {
            thread_name_prefix: Some("par".to_string()),
            stack_size: None,
        };
        assert_eq!(config.thread_name(None).as_deref(), Some("par"));
        assert_eq!(config.thread_name(Some(7)).as_deref(), Some("par-7"));
    }

    #[test]
    fn test_from_file() {
        let path = temp_config_path();
        std::fs::write(&path, "stack_size = 65536\n").unwrap();

        let config = SpawnConfig::from_file(&path).unwrap();
        assert_eq!(config.stack_size, Some(65_536));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let path = temp_config_path();
        let err = SpawnConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
