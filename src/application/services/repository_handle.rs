use std::path::Path;
use std::sync::Arc;

use crate::common::result::FanoutResult;
use crate::domain::entities::repository::Repository;
use crate::infrastructure::scm::RepositoryInspector;

/// A discovered repository together with the means to query it.
///
/// Nothing is cached: every call asks version control again, so two calls
/// can disagree if the working tree changed in between.
#[derive(Clone)]
pub struct RepositoryHandle {
    repository: Repository,
    inspector: Arc<dyn RepositoryInspector>,
}

impl RepositoryHandle {
    pub fn new(repository: Repository, inspector: Arc<dyn RepositoryInspector>) -> Self {
        Self {
            repository,
            inspector,
        }
    }

    /// Wrap every discovered repository, preserving order
    pub fn for_all(
        repositories: Vec<Repository>,
        inspector: Arc<dyn RepositoryInspector>,
    ) -> Vec<Self> {
        repositories
            .into_iter()
            .map(|r| Self::new(r, Arc::clone(&inspector)))
            .collect()
    }

    pub fn path(&self) -> &Path {
        &self.repository.path
    }

    /// True iff the status text contains the inspector's clean marker
    pub async fn check_clean(&self) -> FanoutResult<bool> {
        let status = self.status_text().await?;
        Ok(status.contains(self.inspector.clean_marker()))
    }

    pub async fn current_branch(&self) -> FanoutResult<String> {
        let branch = self.inspector.current_branch(self.path()).await?;
        Ok(branch.trim().to_string())
    }

    pub async fn status_text(&self) -> FanoutResult<String> {
        let status = self.inspector.status_text(self.path()).await?;
        Ok(status.trim().to_string())
    }

    /// Discard uncommitted changes in this repository
    pub async fn hard_reset(&self) -> FanoutResult<()> {
        self.inspector.hard_reset(self.path()).await
    }
}

impl std::fmt::Debug for RepositoryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryHandle")
            .field("path", &self.repository.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::scm::scm_interface::testing::{
        ScriptedInspector, CLEAN_STATUS, DIRTY_STATUS,
    };

    fn handle(inspector: &ScriptedInspector, path: &str) -> RepositoryHandle {
        RepositoryHandle::new(Repository::new(path), Arc::new(inspector.clone()))
    }

    #[tokio::test]
    async fn test_clean_status_contains_marker() {
        let inspector = ScriptedInspector::new().with_repo("/r/a", CLEAN_STATUS, "main");
        assert!(handle(&inspector, "/r/a").check_clean().await.unwrap());
    }

    #[tokio::test]
    async fn test_dirty_status() {
        let inspector = ScriptedInspector::new().with_repo("/r/a", DIRTY_STATUS, "main");
        assert!(!handle(&inspector, "/r/a").check_clean().await.unwrap());
    }

    #[tokio::test]
    async fn test_marker_must_match_verbatim() {
        let inspector =
            ScriptedInspector::new().with_repo("/r/a", "nothing to commit, working  tree clean", "main");
        assert!(!handle(&inspector, "/r/a").check_clean().await.unwrap());
    }

    #[tokio::test]
    async fn test_queries_are_not_cached() {
        let inspector = ScriptedInspector::new().with_repo("/r/a", CLEAN_STATUS, "main");
        let handle = handle(&inspector, "/r/a");

        handle.check_clean().await.unwrap();
        handle.check_clean().await.unwrap();
        handle.status_text().await.unwrap();

        assert_eq!(
            inspector.calls(),
            vec!["status /r/a", "status /r/a", "status /r/a"]
        );
    }

    #[tokio::test]
    async fn test_branch_is_trimmed() {
        let inspector = ScriptedInspector::new().with_repo("/r/a", CLEAN_STATUS, " feature/x\n");
        assert_eq!(handle(&inspector, "/r/a").current_branch().await.unwrap(), "feature/x");
    }

    #[tokio::test]
    async fn test_vanished_repository_is_error_not_panic() {
        let inspector = ScriptedInspector::new();
        assert!(handle(&inspector, "/r/gone").check_clean().await.is_err());
    }

    #[test]
    fn test_for_all_keeps_order() {
        let inspector = Arc::new(ScriptedInspector::new());
        let handles = RepositoryHandle::for_all(
            vec![Repository::new("/r/b"), Repository::new("/r/a")],
            inspector,
        );
        let paths: Vec<_> = handles.iter().map(|h| h.path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![std::path::PathBuf::from("/r/b"), std::path::PathBuf::from("/r/a")]
        );
    }
}
