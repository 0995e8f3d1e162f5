//! CLI command implementations

pub mod doctor;
pub mod list;
pub mod run;
pub mod show_config;
