use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FanoutError {
    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Repository discovery failed under {}: {message}", root.display())]
    DiscoveryError {
        message: String,
        root: PathBuf,
        #[source]
        source: Option<walkdir::Error>,
    },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("No profile with name {name}")]
    ProfileNotFound { name: String },

    #[error("Command execution failed: {message} ({command})")]
    CommandError {
        message: String,
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("No clue what to do with {token:?}")]
    InvalidChoice { token: String },

    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl FanoutError {
    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn discovery_error(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        let message = match source.path() {
            Some(path) => format!("cannot read {}", path.display()),
            None => "cannot read directory".to_string(),
        };
        Self::DiscoveryError {
            message,
            root: root.into(),
            source: Some(source),
        }
    }

    pub fn config_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::ConfigError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn config_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            path,
            source: Some(Box::new(source)),
        }
    }

    pub fn profile_not_found(name: impl Into<String>) -> Self {
        Self::ProfileNotFound { name: name.into() }
    }

    pub fn command_error(
        message: impl Into<String>,
        command: impl Into<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::CommandError {
            message: message.into(),
            command: command.into(),
            exit_code,
            source: None,
        }
    }

    pub fn command_error_with_source(
        message: impl Into<String>,
        command: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::CommandError {
            message: message.into(),
            command: command.into(),
            exit_code: None,
            source: Some(source),
        }
    }

    pub fn invalid_choice(token: impl Into<String>) -> Self {
        Self::InvalidChoice {
            token: token.into(),
        }
    }

    pub fn serialization_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InternalError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for FanoutError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

impl From<serde_yaml::Error> for FanoutError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization_error_with_source("YAML serialization failed", error)
    }
}

impl From<serde_json::Error> for FanoutError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization_error_with_source("JSON serialization failed", error)
    }
}
