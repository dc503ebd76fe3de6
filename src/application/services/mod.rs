pub mod prompter;
pub mod repository_handle;

pub use prompter::{Prompter, StdinPrompter};
pub use repository_handle::RepositoryHandle;
