//! Config loading and validation.

use super::model::Config;
use crate::error::{Result, TwigcError};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(TwigcError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TwigcError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// A blank document yields the default configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| TwigcError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `escape`, when present, must not be blank
    /// - `search_dirs` entries must be non-empty
    pub fn validate(&self) -> Result<()> {
        if let Some(escape) = &self.escape
            && escape.trim().is_empty()
        {
            return Err(TwigcError::ConfigError(
                "config validation failed: escape must not be blank".to_string(),
            ));
        }

        if self.search_dirs.iter().any(|d| d.as_os_str().is_empty()) {
            return Err(TwigcError::ConfigError(
                "config validation failed: search_dirs entries must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
