use std::path::{Path, PathBuf};

use crate::common::error::FanoutError;
use crate::common::result::{FanoutResult, OptionExt, ResultExt};
use crate::domain::entities::config::Config;

/// Config file looked up in the home directory when no path is given.
pub const DEFAULT_CONFIG_FILENAME: &str = ".fanout.json";

/// Environment variable naming an alternative config file.
pub const ENV_CONFIG_FILE: &str = "FANOUT_CONFIG";

/// Serialization format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml`/`.yml` are YAML, anything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Loads the operator configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    home: Option<PathBuf>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    /// Use `home` instead of the real home directory
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// `~/.fanout.json`
    pub fn default_path(&self) -> FanoutResult<PathBuf> {
        self.home
            .as_ref()
            .map(|home| home.join(DEFAULT_CONFIG_FILENAME))
            .ok_or_internal_error("Cannot determine the home directory")
    }

    /// Read and parse the config at `path`, or at the default location
    pub async fn load(&self, path: Option<&Path>) -> FanoutResult<Config> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => self.default_path()?,
        };

        tracing::debug!(path = %path.display(), "loading configuration");

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_config_error(format!("Cannot read {}", path.display()), Some(path.clone()))?;

        self.parse(&content, ConfigFormat::from_path(&path))
            .map_fanout_err(|e| match e {
                FanoutError::SerializationError { source, .. } => FanoutError::ConfigError {
                    message: format!("Cannot parse {}", path.display()),
                    path: Some(path.clone()),
                    source,
                },
                other => other,
            })
    }

    /// Parse config text and expand `~` in profile roots
    pub fn parse(&self, content: &str, format: ConfigFormat) -> FanoutResult<Config> {
        let mut config: Config = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        };

        for profile in &mut config.profiles {
            profile.root_directory = self.expand_home(&profile.root_directory);
        }

        Ok(config)
    }

    fn expand_home(&self, path: &Path) -> PathBuf {
        let Some(home) = &self.home else {
            return path.to_path_buf();
        };
        match path.strip_prefix("~") {
            Ok(rest) => home.join(rest),
            Err(_) => path.to_path_buf(),
        }
    }
}
