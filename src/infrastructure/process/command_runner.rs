//! External command execution.
//!
//! Commands are plain strings split on whitespace into a program and its
//! arguments. There is no quoting: an argument containing whitespace cannot
//! be expressed, and configurations rely on this staying that way.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::common::error::FanoutError;
use crate::common::result::FanoutResult;

/// How the child's standard streams are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Collect stdout and return it trimmed; stderr is discarded
    Capture,
    /// Share the operator's terminal; nothing is returned
    Inherit,
}

/// Runs one external command to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` with `working_dir` as its current directory.
    ///
    /// # Arguments
    ///
    /// * `command` - Command line, split on whitespace by [`split_command`]
    /// * `working_dir` - Current directory of the child process
    /// * `mode` - Whether output is captured or shared with the terminal
    ///
    /// # Returns
    ///
    /// Trimmed stdout in [`OutputMode::Capture`], an empty string in
    /// [`OutputMode::Inherit`].
    ///
    /// # Errors
    ///
    /// [`FanoutError::CommandError`] when the command is empty, cannot be
    /// launched, or exits non-zero. This holds in both modes.
    async fn run(&self, command: &str, working_dir: &Path, mode: OutputMode)
        -> FanoutResult<String>;
}

/// Split a command line into program and arguments on whitespace.
///
/// # Arguments
///
/// * `command` - Command line; quotes are not interpreted
///
/// # Examples
///
/// ```
/// use fanout::infrastructure::process::split_command;
///
/// let (program, args) = split_command("git  rev-parse --abbrev-ref HEAD").unwrap();
/// assert_eq!(program, "git");
/// assert_eq!(args, vec!["rev-parse", "--abbrev-ref", "HEAD"]);
///
/// assert!(split_command("   ").is_err());
/// ```
pub fn split_command(command: &str) -> FanoutResult<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| FanoutError::command_error("Command is empty", command, None))?;
    Ok((program, parts.collect()))
}

/// [`CommandRunner`] backed by real child processes
#[derive(Debug, Default, Clone)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn build_command(program: &str, args: &[&str], working_dir: &Path) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(working_dir);
        cmd
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(
        &self,
        command: &str,
        working_dir: &Path,
        mode: OutputMode,
    ) -> FanoutResult<String> {
        let (program, args) = split_command(command)?;
        let mut cmd = Self::build_command(program, &args, working_dir);

        tracing::debug!(command, dir = %working_dir.display(), ?mode, "spawning command");

        match mode {
            OutputMode::Capture => {
                let output = cmd
                    .stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::null())
                    .output()
                    .await
                    .map_err(|e| {
                        FanoutError::command_error_with_source("Failed to launch", command, e)
                    })?;

                if !output.status.success() {
                    return Err(FanoutError::command_error(
                        "Command exited unsuccessfully",
                        command,
                        output.status.code(),
                    ));
                }

                Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
            }
            OutputMode::Inherit => {
                let status = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .await
                    .map_err(|e| {
                        FanoutError::command_error_with_source("Failed to launch", command, e)
                    })?;

                if !status.success() {
                    return Err(FanoutError::command_error(
                        "Command exited unsuccessfully",
                        command,
                        status.code(),
                    ));
                }

                Ok(String::new())
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! Recording fake used by the use-case tests.

    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// One recorded invocation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Invocation {
        pub command: String,
        pub working_dir: PathBuf,
        pub mode: OutputMode,
    }

    /// Returns canned output per `(command, dir)` and records every call
    #[derive(Clone, Default)]
    pub struct RecordingRunner {
        outputs: Arc<Mutex<HashMap<(String, PathBuf), String>>>,
        failing: Arc<Mutex<Vec<String>>>,
        calls: Arc<Mutex<Vec<Invocation>>>,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_output(self, command: &str, dir: impl Into<PathBuf>, output: &str) -> Self {
            self.outputs
                .lock()
                .unwrap()
                .insert((command.to_string(), dir.into()), output.to_string());
            self
        }

        pub fn failing_on(self, command: &str) -> Self {
            self.failing.lock().unwrap().push(command.to_string());
            self
        }

        pub fn calls(&self) -> Vec<Invocation> {
            self.calls.lock().unwrap().clone()
        }

        pub fn commands(&self) -> Vec<String> {
            self.calls().into_iter().map(|c| c.command).collect()
        }
    }

    #[async_trait]
    impl CommandRunner for RecordingRunner {
        async fn run(
            &self,
            command: &str,
            working_dir: &Path,
            mode: OutputMode,
        ) -> FanoutResult<String> {
            self.calls.lock().unwrap().push(Invocation {
                command: command.to_string(),
                working_dir: working_dir.to_path_buf(),
                mode,
            });

            if self.failing.lock().unwrap().iter().any(|c| c == command) {
                return Err(FanoutError::command_error(
                    "Command exited unsuccessfully",
                    command,
                    Some(1),
                ));
            }

            match mode {
                OutputMode::Capture => Ok(self
                    .outputs
                    .lock()
                    .unwrap()
                    .get(&(command.to_string(), working_dir.to_path_buf()))
                    .cloned()
                    .unwrap_or_default()),
                OutputMode::Inherit => Ok(String::new()),
            }
        }
    }
}
