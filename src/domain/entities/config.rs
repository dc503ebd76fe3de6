use crate::common::error::FanoutError;
use crate::common::result::{FanoutResult, OptionExt};
use crate::domain::value_objects::directory_filter::DirectoryFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shell used for manual resolution when the config names none.
pub const DEFAULT_SHELL_COMMAND: &str = "bash";

fn default_shell_command() -> String {
    DEFAULT_SHELL_COMMAND.to_string()
}

/// A named root directory plus an optional directory-name filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Lookup key
    pub name: String,

    /// Where discovery starts
    #[serde(rename = "rootdir", alias = "rootDirectory")]
    pub root_directory: PathBuf,

    /// Working-directory names to restrict discovery to
    #[serde(default)]
    pub filter: DirectoryFilter,
}

impl Profile {
    pub fn new(name: impl Into<String>, root_directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root_directory: root_directory.into(),
            filter: DirectoryFilter::none(),
        }
    }

    pub fn with_filter(mut self, filter: DirectoryFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Operator configuration: the manual-resolution shell and all profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Interactive shell launched for the `m` choice
    #[serde(rename = "shellCommand", default = "default_shell_command")]
    pub shell_command: String,

    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell_command: default_shell_command(),
            profiles: Vec::new(),
        }
    }
}

impl Config {
    pub fn new(shell_command: impl Into<String>, profiles: Vec<Profile>) -> Self {
        Self {
            shell_command: shell_command.into(),
            profiles,
        }
    }

    /// Find a profile by exact name
    pub fn profile(&self, name: &str) -> FanoutResult<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_fanout(FanoutError::profile_not_found(name))
    }

    /// Names of all configured profiles, in file order
    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }
}
