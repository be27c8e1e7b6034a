use super::schema::{ConfigOverrides, EdmigConfig};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const LOCAL_CONFIG: &str = "edmig.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Config files consulted when none is given, in order:
    /// `./edmig.yaml`, then `~/.edmig/config.yaml`.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".").join(LOCAL_CONFIG)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".edmig").join("config.yaml"));
        }
        paths
    }

    /// First existing search path, or defaults when there is none.
    pub async fn load_default() -> Result<EdmigConfig, ConfigError> {
        match Self::search_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(&path).await,
            None => {
                debug!("No config file found, using defaults");
                Ok(EdmigConfig::default())
            }
        }
    }

    pub async fn load_from(path: &Path) -> Result<EdmigConfig, ConfigError> {
        debug!("Loading config from {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load `path` (or the default locations) and lay the command line
    /// values over it.
    pub async fn load(
        path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<EdmigConfig, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_from(path).await?,
            None => Self::load_default().await?,
        };
        config.apply(overrides);
        Ok(config)
    }
}
