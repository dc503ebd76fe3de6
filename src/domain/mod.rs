//! Domain model: repositories, profiles, and operator choices.

pub mod entities;
pub mod value_objects;
