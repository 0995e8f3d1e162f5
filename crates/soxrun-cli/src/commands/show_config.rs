//! Config command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use crate::config::LoadedConfig;

/// Run the config command, printing the effective configuration as TOML.
pub fn run(loaded: &LoadedConfig) -> Result<ExitCode> {
    match loaded.source {
        Some(ref path) => println!("{}", format!("# from {}", path.display()).dimmed()),
        None => println!("{}", "# built-in defaults".dimmed()),
    }

    let rendered =
        toml::to_string_pretty(&loaded.config).context("Failed to render configuration")?;
    print!("{}", rendered);

    Ok(ExitCode::SUCCESS)
}
