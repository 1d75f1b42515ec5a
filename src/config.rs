//! Configuration Management
//!
//! Handles persistent configuration storage for matlas.

use crate::atlas::client::DEFAULT_BASE_URL;
use crate::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment override for the API root
pub const BASE_URL_ENV: &str = "MATLAS_BASE_URL";
/// Environment override for the default project (group) id
pub const PROJECT_ID_ENV: &str = "MATLAS_PROJECT_ID";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// API root, e.g. `https://cloud.mongodb.com/api/atlas/v1.0`
    #[serde(default)]
    pub base_url: Option<String>,
    /// Default project (group) id
    #[serde(default)]
    pub project_id: Option<String>,
    /// Bearer token; `MATLAS_ACCESS_TOKEN` takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Transport-wide request timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("matlas").join("config.json"))
    }

    /// Load configuration from disk, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AtlasError::Config(format!("failed to read {:?}: {}", path, e)))?;
        serde_json::from_str(&content)
            .map_err(|e| AtlasError::Config(format!("failed to parse {:?}: {}", path, e)))
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AtlasError::Config(format!("failed to create {:?}: {}", parent, e)))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AtlasError::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content)
            .map_err(|e| AtlasError::Config(format!("failed to write {:?}: {}", path, e)))?;

        Ok(())
    }

    /// Get effective base URL (env > config > default)
    pub fn effective_base_url(&self) -> String {
        self.effective_base_url_from(std::env::var(BASE_URL_ENV).ok())
    }

    pub fn effective_base_url_from(&self, env_value: Option<String>) -> String {
        env_override(BASE_URL_ENV, env_value)
            .filter(|v| match url::Url::parse(v) {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!("Ignoring invalid {}={:?}: {}", BASE_URL_ENV, v, e);
                    false
                }
            })
            .or_else(|| non_blank(self.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Get effective project id (env > config)
    pub fn effective_project(&self) -> Option<String> {
        self.effective_project_from(std::env::var(PROJECT_ID_ENV).ok())
    }

    pub fn effective_project_from(&self, env_value: Option<String>) -> Option<String> {
        env_override(PROJECT_ID_ENV, env_value).or_else(|| non_blank(self.project_id.clone()))
    }

    /// Set project and save
    pub fn set_project(&mut self, project_id: &str) -> Result<()> {
        self.project_id = Some(project_id.to_string());
        self.save()
    }
}

/// Non-blank value of an environment override; a set-but-blank variable is
/// reported and ignored
fn env_override(name: &str, value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = non_blank(Some(value));
    if trimmed.is_none() {
        tracing::warn!("Ignoring blank {} environment variable", name);
    }
    trimmed
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
