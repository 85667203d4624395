//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default API host, DeepL's free tier
pub const DEFAULT_API_HOST: &str = "https://api-free.deepl.com";

/// Default translate endpoint path
pub const DEFAULT_API_PATH: &str = "/v2/translate";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30000;

/// Configuration for the DeepL engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeeplConfig {
    /// DeepL API key
    pub api_key: String,
    /// API host; trailing slashes are tolerated
    pub api_host: String,
    /// Endpoint path under the host
    pub api_path: String,
    /// Transport timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for DeeplConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("DEEPL_API_KEY").unwrap_or_default(),
            api_host: std::env::var("DEEPL_API_HOST")
                .unwrap_or_else(|_| DEFAULT_API_HOST.to_string()),
            api_path: DEFAULT_API_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl DeeplConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("DEEPL_API_KEY")
            .map_err(|_| anyhow::anyhow!("DEEPL_API_KEY environment variable is required"))?;

        let api_host = std::env::var("DEEPL_API_HOST")
            .unwrap_or_else(|_| DEFAULT_API_HOST.to_string());

        let api_path = std::env::var("DEEPL_API_PATH")
            .unwrap_or_else(|_| DEFAULT_API_PATH.to_string());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
            .parse::<u64>()?;

        Ok(Self {
            api_key,
            api_host,
            api_path,
            timeout_ms,
        })
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(anyhow::anyhow!("API key is required"));
        }

        if self.api_host.is_empty() {
            return Err(anyhow::anyhow!("API host is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// Full request URL: host with trailing slashes stripped, joined
    /// with the path by a single `/`. An empty path falls back to the
    /// default translate path.
    pub fn endpoint(&self) -> String {
        let host = self.api_host.trim_end_matches('/');
        let path = if self.api_path.is_empty() {
            DEFAULT_API_PATH
        } else {
            self.api_path.as_str()
        };

        if path.starts_with('/') {
            format!("{}{}", host, path)
        } else {
            format!("{}/{}", host, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> DeeplConfig {
        DeeplConfig {
            api_key: "test-key".to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    #[test]
    fn test_endpoint_default() {
        let config = test_config();
        assert_eq!(config.endpoint(), "https://api-free.deepl.com/v2/translate");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let mut config = test_config();
        config.api_host = "https://api.deepl.com/".to_string();
        assert_eq!(config.endpoint(), "https://api.deepl.com/v2/translate");

        config.api_host = "https://api.deepl.com//".to_string();
        assert_eq!(config.endpoint(), "https://api.deepl.com/v2/translate");
    }

    #[test]
    fn test_endpoint_inserts_separator() {
        let mut config = test_config();
        config.api_path = "v2/translate".to_string();
        assert_eq!(config.endpoint(), "https://api-free.deepl.com/v2/translate");
    }

    #[test]
    fn test_endpoint_empty_path_uses_default() {
        let mut config = test_config();
        config.api_path = String::new();
        assert_eq!(config.endpoint(), "https://api-free.deepl.com/v2/translate");
    }

    #[test]
    fn test_validation_rejects_blank_key() {
        let mut config = test_config();
        config.api_key = "   ".to_string();
        assert!(config.validate().is_err());

        config.api_key = "k".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_round_trip() {
        let config = test_config();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deepl.json");

        config.to_file(&path).unwrap();
        let loaded = DeeplConfig::from_file(&path).unwrap();

        assert_eq!(loaded.api_key, config.api_key);
        assert_eq!(loaded.api_host, config.api_host);
        assert_eq!(loaded.api_path, config.api_path);
        assert_eq!(loaded.timeout_ms, config.timeout_ms);
    }
}
