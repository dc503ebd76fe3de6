pub mod broadcast;
pub mod status;

use std::sync::Arc;

use crate::application::services::repository_handle::RepositoryHandle;
use crate::domain::entities::config::Profile;
use crate::infrastructure::filesystem::repository_walker::RepositoryWalker;
use crate::infrastructure::process::CommandRunner;
use crate::infrastructure::scm::GitInspector;

/// Discover the profile's repositories and wrap them for querying.
///
/// Discovery finishes completely before any repository is touched.
pub(crate) fn discover_handles(
    profile: &Profile,
    runner: Arc<dyn CommandRunner>,
) -> anyhow::Result<Vec<RepositoryHandle>> {
    let repositories = RepositoryWalker::new().discover(&profile.root_directory, &profile.filter)?;
    let inspector = Arc::new(GitInspector::new(runner));
    Ok(RepositoryHandle::for_all(repositories, inspector))
}
