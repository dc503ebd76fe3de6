//! Shared error handling and output helpers.

pub mod error;
pub mod result;
pub mod style;
