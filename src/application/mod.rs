//! Use cases and the services they are built from.

pub mod services;
pub mod use_cases;
