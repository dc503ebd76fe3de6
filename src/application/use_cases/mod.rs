pub mod broadcast;
pub mod status_check;
