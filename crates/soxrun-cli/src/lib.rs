//! soxrun CLI library.
//!
//! This crate provides the terminal host for the soxrun recipe registry:
//! configuration, logging, the shell executor, and the subcommands.

pub mod commands;
pub mod config;
pub mod executor;
pub mod host;
pub mod logging;
