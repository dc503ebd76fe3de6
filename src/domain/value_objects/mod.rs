pub mod directory_filter;
pub mod dirty_choice;

pub use directory_filter::DirectoryFilter;
pub use dirty_choice::DirtyResolutionChoice;
