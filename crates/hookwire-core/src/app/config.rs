//! ReceiverConfig - 受信側サービスの設定
//!
//! JSON で書きます。
//!
//! ```json
//! { "expected_events": ["account.created", "transfer.created"] }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReceiverConfig {
    /// Tags the service must have a handler for. `build()` fails fast when
    /// one of them is missing. Tags outside this list are still accepted.
    #[serde(default)]
    pub expected_events: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ReceiverConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_expected_events() {
        let config =
            ReceiverConfig::from_json_str(r#"{"expected_events":["account.created"]}"#).unwrap();
        assert_eq!(config.expected_events, vec!["account.created".to_string()]);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(
            ReceiverConfig::from_json_str("{}").unwrap(),
            ReceiverConfig::default()
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = ReceiverConfig::from_json_str(r#"{"expected_event":["account.created"]}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ReceiverConfig::from_path("/nonexistent/hookwire.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/hookwire.json"));
    }
}
