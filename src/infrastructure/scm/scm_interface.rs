use async_trait::async_trait;
use std::path::Path;

use crate::common::result::FanoutResult;

/// Queries and the one destructive operation the tool needs from version control
#[async_trait]
pub trait RepositoryInspector: Send + Sync {
    /// Human-readable status text for the working tree at `repo_path`
    async fn status_text(&self, repo_path: &Path) -> FanoutResult<String>;

    /// Abbreviated name of the checked-out branch or ref
    async fn current_branch(&self, repo_path: &Path) -> FanoutResult<String>;

    /// Discard uncommitted changes, with output on the operator's terminal
    async fn hard_reset(&self, repo_path: &Path) -> FanoutResult<()>;

    /// Phrase that appears in [`status_text`](Self::status_text) iff nothing is pending
    fn clean_marker(&self) -> &str;
}
