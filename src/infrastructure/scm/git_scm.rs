use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use super::scm_interface::RepositoryInspector;
use crate::common::result::FanoutResult;
use crate::infrastructure::process::{CommandRunner, OutputMode};

/// Status phrase git prints when the working tree has nothing pending.
pub const GIT_CLEAN_MARKER: &str = "working tree clean";

/// [`RepositoryInspector`] that shells out to the `git` executable
pub struct GitInspector {
    runner: Arc<dyn CommandRunner>,
    git_executable: String,
}

impl GitInspector {
    /// Create a new Git inspector using `git` from `PATH`
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self::with_executable(runner, "git")
    }

    /// Create a new Git inspector with a custom executable path.
    ///
    /// The path must not contain whitespace.
    pub fn with_executable(runner: Arc<dyn CommandRunner>, executable: impl Into<String>) -> Self {
        Self {
            runner,
            git_executable: executable.into(),
        }
    }

    fn git_command(&self, args: &str) -> String {
        format!("{} {}", self.git_executable, args)
    }
}

#[async_trait]
impl RepositoryInspector for GitInspector {
    async fn status_text(&self, repo_path: &Path) -> FanoutResult<String> {
        self.runner
            .run(&self.git_command("status"), repo_path, OutputMode::Capture)
            .await
    }

    async fn current_branch(&self, repo_path: &Path) -> FanoutResult<String> {
        self.runner
            .run(
                &self.git_command("rev-parse --abbrev-ref HEAD"),
                repo_path,
                OutputMode::Capture,
            )
            .await
    }

    async fn hard_reset(&self, repo_path: &Path) -> FanoutResult<()> {
        self.runner
            .run(&self.git_command("reset --hard"), repo_path, OutputMode::Inherit)
            .await?;
        Ok(())
    }

    fn clean_marker(&self) -> &str {
        GIT_CLEAN_MARKER
    }
}
