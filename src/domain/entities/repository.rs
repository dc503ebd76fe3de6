use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the directory that marks a git working tree.
pub const MARKER_DIR_NAME: &str = ".git";

/// A discovered repository, identified by its working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Working directory, i.e. the parent of the marker directory
    pub path: PathBuf,
}

impl Repository {
    /// Create a repository from its working directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a repository from the path of its marker directory.
    ///
    /// Returns `None` if `marker` has no parent.
    pub fn from_marker(marker: &Path) -> Option<Self> {
        marker.parent().map(Self::new)
    }

    /// Basename of the working directory
    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    pub fn display(&self) -> std::path::Display<'_> {
        self.path.display()
    }
}
