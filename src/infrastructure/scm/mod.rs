/// Version control access.
///
/// Only git is supported; everything goes through the external `git`
/// executable so results match what the operator sees in a terminal.
pub mod git_scm;
pub mod scm_interface;

pub use git_scm::{GitInspector, GIT_CLEAN_MARKER};
pub use scm_interface::RepositoryInspector;
