//! Broadcasting one command across discovered repositories.
//!
//! Each repository goes through the same steps, strictly one after
//! another: check cleanliness, ask the operator what to do if dirty, act
//! on the answer, then run the command. Cleanliness is checked exactly
//! once; after a manual session or a reset the command runs without
//! looking again.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::prompter::Prompter;
use crate::application::services::repository_handle::RepositoryHandle;
use crate::common::error::FanoutError;
use crate::common::result::FanoutResult;
use crate::common::style::Style;
use crate::domain::value_objects::dirty_choice::DirtyResolutionChoice;
use crate::infrastructure::process::{CommandRunner, OutputMode};

pub const DIRTY_MENU: &str =
    "Do you want to continue anyway (c), manually resolve it (m), hard reset prior (h), or skip (s)?";
pub const DIRTY_PROMPT: &str = "answer (c/m/h/s): ";

/// What a broadcast run needs besides the repositories
#[derive(Debug, Clone)]
pub struct BroadcastConfig {
    /// Command sent to every repository, split on whitespace
    pub command: String,

    /// Interactive shell opened for manual resolution
    pub shell_command: String,
}

impl BroadcastConfig {
    pub fn new(command: impl Into<String>, shell_command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            shell_command: shell_command.into(),
        }
    }
}

/// Whether the command ran in a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BroadcastStatus {
    Broadcast,
    Skipped,
}

/// What happened in one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOutcome {
    pub path: PathBuf,
    pub status: BroadcastStatus,
    /// Operator's answer, `None` when the repository was clean
    pub resolution: Option<DirtyResolutionChoice>,
}

/// Outcomes of a whole run
#[derive(Debug, Clone, Default)]
pub struct BroadcastResult {
    pub outcomes: Vec<RepositoryOutcome>,
    pub broadcast_count: usize,
    pub skipped_count: usize,
}

impl BroadcastResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_outcome(&mut self, outcome: RepositoryOutcome) {
        match outcome.status {
            BroadcastStatus::Broadcast => self.broadcast_count += 1,
            BroadcastStatus::Skipped => self.skipped_count += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn total_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Repositories the operator resolved before broadcasting
    pub fn resolved(&self) -> Vec<&RepositoryOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == BroadcastStatus::Broadcast && o.resolution.is_some())
            .collect()
    }
}

/// Runs the broadcast procedure over a list of repositories
pub struct BroadcastUseCase {
    config: BroadcastConfig,
    runner: Arc<dyn CommandRunner>,
    prompter: Arc<dyn Prompter>,
    style: Arc<dyn Style>,
}

impl BroadcastUseCase {
    pub fn new(
        config: BroadcastConfig,
        runner: Arc<dyn CommandRunner>,
        prompter: Arc<dyn Prompter>,
        style: Arc<dyn Style>,
    ) -> Self {
        Self {
            config,
            runner,
            prompter,
            style,
        }
    }

    /// Process every repository in order.
    ///
    /// Stops at the first error, including an unrecognized answer; later
    /// repositories are not touched and earlier ones are not rolled back.
    pub async fn execute<W: Write>(
        &self,
        handles: &[RepositoryHandle],
        out: &mut W,
    ) -> FanoutResult<BroadcastResult> {
        self.validate_command()?;

        let mut result = BroadcastResult::new();
        for handle in handles {
            let outcome = self.process(handle, out).await?;
            result.add_outcome(outcome);
        }
        Ok(result)
    }

    fn validate_command(&self) -> FanoutResult<()> {
        if self.config.command.trim().is_empty() {
            return Err(FanoutError::command_error(
                "Broadcast command is empty",
                &self.config.command,
                None,
            ));
        }
        Ok(())
    }

    /// Process a single repository
    pub async fn process<W: Write>(
        &self,
        handle: &RepositoryHandle,
        out: &mut W,
    ) -> FanoutResult<RepositoryOutcome> {
        let path = handle.path().to_path_buf();
        let mut resolution = None;

        if !handle.check_clean().await? {
            let choice = self.ask_for_choice(handle, out).await?;
            tracing::info!(path = %path.display(), %choice, "dirty repository resolution");

            match choice {
                DirtyResolutionChoice::Continue => {}
                DirtyResolutionChoice::ManualResolve => {
                    writeln!(out, "Manually resolving (press ctl-D to quit, or type 'exit')...")?;
                    out.flush()?;
                    self.runner
                        .run(&self.config.shell_command, &path, OutputMode::Inherit)
                        .await?;
                }
                DirtyResolutionChoice::HardReset => {
                    writeln!(out, "Hard Resetting, then Broadcasting...")?;
                    out.flush()?;
                    handle.hard_reset().await?;
                }
                DirtyResolutionChoice::Skip => {
                    write!(out, "Skipping...\n\n\n")?;
                    out.flush()?;
                    tracing::warn!(path = %path.display(), "skipped dirty repository");
                    return Ok(RepositoryOutcome {
                        path,
                        status: BroadcastStatus::Skipped,
                        resolution: Some(choice),
                    });
                }
            }
            resolution = Some(choice);
        }

        self.run_broadcast(handle, out).await?;

        Ok(RepositoryOutcome {
            path,
            status: BroadcastStatus::Broadcast,
            resolution,
        })
    }

    async fn ask_for_choice<W: Write>(
        &self,
        handle: &RepositoryHandle,
        out: &mut W,
    ) -> FanoutResult<DirtyResolutionChoice> {
        let warning = format!("Directory {} is in a dirty state!!!", handle.path().display());
        writeln!(out, "{}", self.style.alert(&warning))?;
        writeln!(out, "{}", DIRTY_MENU)?;
        out.flush()?;

        let answer = self.prompter.ask(DIRTY_PROMPT).await?;
        answer.parse().map_err(|e| {
            tracing::error!(path = %handle.path().display(), answer = answer.trim(), "unrecognized answer");
            e
        })
    }

    async fn run_broadcast<W: Write>(&self, handle: &RepositoryHandle, out: &mut W) -> FanoutResult<()> {
        writeln!(
            out,
            "Broadcasting {} to directory {}\n",
            self.style.highlight(&self.config.command),
            self.style.highlight(&handle.path().display().to_string()),
        )?;
        out.flush()?;

        self.runner
            .run(&self.config.command, handle.path(), OutputMode::Inherit)
            .await?;

        write!(out, "\n\n\n")?;
        out.flush()?;
        Ok(())
    }
}
