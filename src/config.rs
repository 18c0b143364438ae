use std::path::Path;

use serde::Deserialize;

use crate::error::ErrorVerbosity;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[source] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// How much detail rejections carry.
    pub error_verbosity: ErrorVerbosity,
}

impl ApiConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(ConfigError::Parse)
    }

    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = tokio::fs::read_to_string(path.as_ref())
            .await
            .map_err(ConfigError::Read)?;

        let config = Self::from_yaml_str(&yaml)?;

        tracing::debug!(?config, "Loaded");

        Ok(config)
    }
}
