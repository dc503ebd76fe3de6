pub mod config_store;
pub mod repository_walker;

pub use config_store::{ConfigFormat, ConfigStore};
pub use repository_walker::{RepositoryWalker, MAX_DEPTH};
