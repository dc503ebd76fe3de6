pub mod config;
pub mod repository;

pub use config::{Config, Profile};
pub use repository::Repository;
