//! Wallet configuration

use crate::error::{HtlcError, Result};
use crate::types::AssetId;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings shared by every HTLC action
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Asset used for fees when the caller does not pick one
    pub core_asset_id: AssetId,
    /// Broadcast signed transactions instead of only signing them
    pub broadcast: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            core_asset_id: AssetId::core(),
            broadcast: true,
        }
    }
}

impl WalletConfig {
    /// Load configuration from a JSON file; missing fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            HtlcError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| HtlcError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WalletConfig::default();
        assert_eq!(config.core_asset_id, AssetId::core());
        assert!(config.broadcast);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WalletConfig::from_json(r#"{"broadcast": false}"#).unwrap();
        assert_eq!(config.core_asset_id, AssetId::core());
        assert!(!config.broadcast);

        let config = WalletConfig::from_json(r#"{"core_asset_id": "1.3.1"}"#).unwrap();
        assert_eq!(config.core_asset_id, AssetId::new(1));
    }

    #[test]
    fn test_invalid_config() {
        let result = WalletConfig::from_json(r#"{"core_asset_id": "1.2.0"}"#);
        assert!(matches!(result, Err(HtlcError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = WalletConfig::from_file("/nonexistent/htlc-wallet.json");
        assert!(matches!(result, Err(HtlcError::Configuration(_))));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("htlc-wallet-{}.json", rand::random::<u32>()));
        std::fs::write(&path, r#"{"core_asset_id": "1.3.5", "broadcast": false}"#).unwrap();

        let config = WalletConfig::from_file(&path).unwrap();
        assert_eq!(config.core_asset_id, AssetId::new(5));
        assert!(!config.broadcast);

        std::fs::remove_file(&path).unwrap();
    }
}
