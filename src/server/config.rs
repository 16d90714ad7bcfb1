//! Configuration loading for cropcastd.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.cropcast/config.toml` (user)
//! 3. `/etc/cropcast/config.toml` (system)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::cache::CacheConfig;
use crate::{CropcastError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub cache: Option<CacheSettings>,
}

/// Server network configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000).
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1:5000".to_string()
}

/// Paths to the fitted artifacts loaded at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Min-max scaler dump (first chain stage).
    #[serde(default = "default_minmax_path")]
    pub minmax_scaler: PathBuf,
    /// Standardization scaler dump (second chain stage).
    #[serde(default = "default_standard_path")]
    pub standard_scaler: PathBuf,
    /// Softmax-linear classifier dump.
    #[serde(default = "default_classifier_path")]
    pub classifier: PathBuf,
    /// ONNX classifier graph; overrides `classifier` when set and the
    /// daemon was built with the `onnx` feature.
    #[serde(default)]
    pub onnx_model: Option<PathBuf>,
    /// Label sidecar for the ONNX graph, required alongside `onnx_model`.
    #[serde(default)]
    pub onnx_labels: Option<PathBuf>,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            minmax_scaler: default_minmax_path(),
            standard_scaler: default_standard_path(),
            classifier: default_classifier_path(),
            onnx_model: None,
            onnx_labels: None,
        }
    }
}

fn default_minmax_path() -> PathBuf {
    PathBuf::from("artifacts/minmax_scaler.json")
}

fn default_standard_path() -> PathBuf {
    PathBuf::from("artifacts/standard_scaler.json")
}

fn default_classifier_path() -> PathBuf {
    PathBuf::from("artifacts/classifier.json")
}

/// Prediction cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Maximum cached predictions (default: 10,000).
    #[serde(default = "default_cache_entries")]
    pub max_entries: u64,
    /// Entry time-to-live in seconds (default: 3600).
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

fn default_cache_entries() -> u64 {
    10_000
}

fn default_cache_ttl() -> u64 {
    3600
}

impl CacheSettings {
    /// Convert to the pipeline's cache configuration.
    pub fn to_cache_config(&self) -> CacheConfig {
        CacheConfig::new()
            .max_entries(self.max_entries)
            .ttl(Duration::from_secs(self.ttl_secs))
    }
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided)
    /// 2. `~/.cropcast/config.toml`
    /// 3. `/etc/cropcast/config.toml`
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_config_path(explicit_path)?;
        let content = fs::read_to_string(&path).map_err(|e| {
            CropcastError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            CropcastError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(path.to_path_buf());
            }
            return Err(CropcastError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".cropcast").join("config.toml");
            if user_config.exists() {
                return Ok(user_config);
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/cropcast/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }

        Err(CropcastError::Configuration(
            "No config file found. Create ~/.cropcast/config.toml or /etc/cropcast/config.toml"
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.address, "127.0.0.1:5000");
        assert_eq!(
            config.artifacts.minmax_scaler,
            PathBuf::from("artifacts/minmax_scaler.json")
        );
        assert!(config.cache.is_none());
    }

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [server]
            address = "0.0.0.0:5000"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.address, "0.0.0.0:5000");
        // Defaults preserved
        assert_eq!(
            config.artifacts.classifier,
            PathBuf::from("artifacts/classifier.json")
        );
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [server]
            address = "127.0.0.1:5000"

            [artifacts]
            minmax_scaler = "/opt/cropcast/minmax_scaler.json"
            standard_scaler = "/opt/cropcast/standard_scaler.json"
            classifier = "/opt/cropcast/classifier.json"

            [cache]
            max_entries = 500
            ttl_secs = 60
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.artifacts.minmax_scaler,
            PathBuf::from("/opt/cropcast/minmax_scaler.json")
        );
        let cache = config.cache.unwrap();
        assert_eq!(cache.max_entries, 500);
        assert_eq!(cache.ttl_secs, 60);

        let cache_config = cache.to_cache_config();
        assert_eq!(cache_config.max_entries, 500);
        assert_eq!(cache_config.ttl, Duration::from_secs(60));
    }

    #[test]
    fn parse_onnx_artifact_paths() {
        let toml = r#"
            [artifacts]
            onnx_model = "/opt/cropcast/model.onnx"
            onnx_labels = "/opt/cropcast/labels.json"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.artifacts.onnx_model,
            Some(PathBuf::from("/opt/cropcast/model.onnx"))
        );
        assert_eq!(
            config.artifacts.onnx_labels,
            Some(PathBuf::from("/opt/cropcast/labels.json"))
        );
    }

    #[test]
    fn config_not_found_returns_error() {
        let result = Config::load(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Config file not found"));
    }
}
