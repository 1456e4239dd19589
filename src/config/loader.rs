//! Configuration loading and merging logic
//!
//! Handles loading configuration from its sources and merging them according
//! to precedence rules.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{defaults, paths, schema::Config};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        let mut config = Self::load_defaults();

        if let Ok(root_config) = Self::load_file(&paths::root_config_path()) {
            config = root_config;
        }

        config = Self::apply_env_overrides(config);

        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_file(path: &PathBuf) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration by loading and checking for errors
    pub fn validate() -> Result<()> {
        let root_path = paths::root_config_path();
        if root_path.exists() {
            let contents = std::fs::read_to_string(&root_path)
                .with_context(|| format!("Failed to read config file: {}", root_path.display()))?;

            let config: Config = serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", root_path.display()))?;

            config.default_object_type.parse::<crate::models::ObjectType>().map_err(|e| {
                anyhow::anyhow!("defaultObjectType is invalid: {}", e)
            })?;

            if let Some(snapshot) = &config.snapshot_path {
                if !snapshot.exists() {
                    return Err(anyhow::anyhow!(
                        "snapshotPath does not exist: {}",
                        snapshot.display()
                    ));
                }
            }
        }

        let _ = Self::load().context("Failed to load merged configuration")?;

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        // MQFLOW_SNAPSHOT override
        if let Ok(snapshot) = std::env::var("MQFLOW_SNAPSHOT") {
            config.snapshot_path = Some(PathBuf::from(snapshot));
        }

        // MQFLOW_DEFAULT_OBJECT_TYPE override
        if let Ok(object_type) = std::env::var("MQFLOW_DEFAULT_OBJECT_TYPE") {
            config.default_object_type = object_type;
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &PathBuf) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
