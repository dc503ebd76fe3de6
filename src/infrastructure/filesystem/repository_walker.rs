//! Repository discovery.
//!
//! Walks a directory tree depth-first looking for `.git` directories. The
//! walk is bounded in depth, never enters a repository once its marker is
//! found, and fails as a whole on the first unreadable directory.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::common::error::FanoutError;
use crate::common::result::FanoutResult;
use crate::domain::entities::repository::{Repository, MARKER_DIR_NAME};
use crate::domain::value_objects::directory_filter::DirectoryFilter;

/// Entries this many path components below the root are never visited.
///
/// A marker at `<root>/a/.git` (two components) is found; one at
/// `<root>/a/b/.git` (three components) is not.
pub const MAX_DEPTH: usize = 3;

/// Finds repository working directories under a root
#[derive(Debug, Clone)]
pub struct RepositoryWalker {
    max_depth: usize,
}

impl Default for RepositoryWalker {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

impl RepositoryWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover repositories under `root`, in traversal order.
    ///
    /// Siblings are visited in file-name order, except that a marker is
    /// always visited before its siblings, so one snapshot of a tree
    /// always yields the same sequence. Once a marker is seen, nothing
    /// else inside that working directory is visited, so a repository
    /// nested in another one is never reported.
    ///
    /// With a non-empty `filter`, only repositories whose working
    /// directory basename is listed are returned; markers that fail the
    /// filter still stop the descent.
    ///
    /// # Errors
    ///
    /// Returns [`FanoutError::DiscoveryError`] on the first entry that
    /// cannot be read, including a missing `root`.
    pub fn discover(&self, root: &Path, filter: &DirectoryFilter) -> FanoutResult<Vec<Repository>> {
        let mut repositories = Vec::new();
        let mut working_dirs: Vec<PathBuf> = Vec::new();

        let mut entries = WalkDir::new(root)
            .follow_links(false)
            .max_depth(self.max_depth.saturating_sub(1))
            .sort_by(marker_first)
            .into_iter();

        while let Some(entry) = entries.next() {
            let entry = entry.map_err(|e| FanoutError::discovery_error(root, e))?;

            if working_dirs.iter().any(|dir| entry.path().starts_with(dir)) {
                if entry.file_type().is_dir() {
                    entries.skip_current_dir();
                }
                continue;
            }

            if !is_marker(&entry) {
                continue;
            }
            entries.skip_current_dir();

            let Some(repository) = Repository::from_marker(entry.path()) else {
                continue;
            };
            working_dirs.push(repository.path.clone());

            if filter.is_empty() || repository.name().is_some_and(|name| filter.allows(name)) {
                tracing::debug!(path = %repository.display(), "discovered repository");
                repositories.push(repository);
            } else {
                tracing::trace!(path = %repository.display(), "repository excluded by filter");
            }
        }

        tracing::info!(
            root = %root.display(),
            count = repositories.len(),
            "discovery finished"
        );
        Ok(repositories)
    }
}

fn is_marker(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == MARKER_DIR_NAME
}

fn marker_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let rank = |e: &DirEntry| e.file_name() != MARKER_DIR_NAME;
    rank(a)
        .cmp(&rank(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}
