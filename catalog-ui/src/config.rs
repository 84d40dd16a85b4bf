use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::http_client::ClientOptions;

pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";
pub const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG";
pub const BASE_API_ENV: &str = "CATALOG_BASE_API";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for every resource path; keep the trailing slash.
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub api: ApiConfig,
    pub window: WindowConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:3000/".to_string(),
            timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Product Catalog".to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl ApiConfig {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from file with environment variable overrides.
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            Self::load_from_file(&path)?
        } else {
            log::info!("{} not found, using defaults", path.display());
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply overrides from `lookup` (the process environment in `load`).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_API_ENV) {
            if !base_url.trim().is_empty() {
                self.api.base_url = base_url;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3000/");
        assert!(config.api.timeout_secs.is_none());
        assert_eq!(config.api.client_options().timeout, None);
        assert_eq!(config.window.title, "Product Catalog");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CatalogConfig::from_toml(
            r#"
            [api]
            base_url = "https://fakestoreapi.com/"
            timeout_secs = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://fakestoreapi.com/");
        assert_eq!(
            config.api.client_options().timeout,
            Some(Duration::from_secs(15))
        );
        assert_eq!(config.api.connect_timeout_secs, None);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(CatalogConfig::from_toml("[api]\nbase_url = 3").is_err());
    }

    #[test]
    fn test_env_override_replaces_base_url() {
        let mut config = CatalogConfig::default();
        config.apply_overrides(|key| match key {
            BASE_API_ENV => Some("http://api.internal:8080/".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "http://api.internal:8080/");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let mut config = CatalogConfig::default();
        config.apply_overrides(|_| Some("  ".to_string()));
        assert_eq!(config.api.base_url, "http://localhost:3000/");
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let err = CatalogConfig::load_from_file(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
