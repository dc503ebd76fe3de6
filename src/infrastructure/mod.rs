/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Process execution (the command runner)
/// - Git queries built on the command runner
/// - File system operations (repository discovery, config files)
pub mod filesystem;
pub mod process;
pub mod scm;

// Re-export commonly used types
pub use filesystem::{config_store::ConfigStore, repository_walker::RepositoryWalker};
pub use process::{CommandRunner, OutputMode, SystemCommandRunner};
pub use scm::{GitInspector, RepositoryInspector};
