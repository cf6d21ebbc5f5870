//! Persistence of the provider settings
//!
//! The settings are a single JSON record under a fixed storage key. The record
//! is read once at startup and rewritten wholesale on every successful save.

use super::env::interpolate_config_env_vars;
use super::error::{ConfigError, ConfigResult};
use super::schema::{DeploymentConfig, ProviderConfig};
use super::validator::ConfigValidator;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// Fixed key the settings record is stored under
pub const STORAGE_KEY: &str = "chat_generator_config";

/// File-backed store for [`ProviderConfig`]
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at `dir`; nothing is touched until the first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the persisted record
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", STORAGE_KEY))
    }

    /// Load the saved settings; `Ok(None)` when nothing has been saved yet
    pub fn load(&self) -> ConfigResult<Option<ProviderConfig>> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No saved settings at {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.to_string_lossy().to_string(),
                    source: e,
                })
            }
        };

        let mut config: ProviderConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_string_lossy().to_string(),
                line: Some(e.line()),
                column: Some(e.column()),
                message: e.to_string(),
            })?;

        interpolate_config_env_vars(&mut config)?;
        Ok(Some(config))
    }

    /// Load the saved settings or fall back to first-run defaults
    pub fn load_or_default(&self, deployment: &DeploymentConfig) -> ConfigResult<ProviderConfig> {
        Ok(self
            .load()?
            .unwrap_or_else(|| ProviderConfig::default_for(deployment)))
    }

    /// Validate and persist the settings, replacing any previous record
    pub fn save(&self, config: &ProviderConfig, deployment: &DeploymentConfig) -> ConfigResult<()> {
        ConfigValidator::new().validate(config, deployment)?;

        fs::create_dir_all(&self.dir).map_err(|e| ConfigError::Io {
            path: self.dir.to_string_lossy().to_string(),
            source: e,
        })?;

        let path = self.path();
        let json = serde_json::to_string_pretty(config).map_err(|e| ConfigError::Parse {
            path: path.to_string_lossy().to_string(),
            line: None,
            column: None,
            message: e.to_string(),
        })?;

        // Write to a sibling file first so a crash never leaves half a record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| ConfigError::Io {
            path: tmp.to_string_lossy().to_string(),
            source: e,
        })?;
        fs::rename(&tmp, &path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Remove the saved settings; returns whether a record existed
    pub fn clear(&self) -> ConfigResult<bool> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Cleared settings at {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ConfigError::Io {
                path: path.to_string_lossy().to_string(),
                source: e,
            }),
        }
    }
}
