//! Doctor command implementation
//!
//! Checks that sox and the configured shell are available.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

use crate::config::LoadedConfig;

/// Run the doctor command
///
/// Checks:
/// - sox installation and version
/// - Shell used to run command lines
/// - Config file in effect
///
/// # Returns
/// Exit code: 0 if all checks pass, 1 if any fail
pub fn run(loaded: &LoadedConfig) -> Result<ExitCode> {
    let config = &loaded.config;

    println!("{}", "soxrun Doctor".cyan().bold());
    println!("{}", "=============".cyan());
    println!();

    let mut all_ok = true;

    println!("{}", "Versions:".bold());
    println!("  {} soxrun v{}", "->".green(), env!("CARGO_PKG_VERSION"));
    println!();

    println!("{}", "Dependencies:".bold());
    match check_sox(&config.sox) {
        SoxStatus::Found { path, version } => {
            println!(
                "  {} sox {} ({})",
                "ok".green(),
                version.as_deref().unwrap_or("(unknown version)"),
                path.display()
            );
        }
        SoxStatus::NotFound => {
            println!("  {} sox not found: {}", "!!".red(), config.sox);
            println!(
                "     {}",
                "Install SoX from https://sourceforge.net/projects/sox/ or set `sox` in the config."
                    .dimmed()
            );
            all_ok = false;
        }
        SoxStatus::Error(e) => {
            println!("  {} sox check failed: {}", "!!".red(), e);
            all_ok = false;
        }
    }

    match which::which(&config.shell) {
        Ok(path) => println!("  {} shell {}", "ok".green(), path.display()),
        Err(_) => {
            println!("  {} shell not found: {}", "!!".red(), config.shell);
            all_ok = false;
        }
    }

    println!();

    println!("{}", "Configuration:".bold());
    match loaded.source {
        Some(ref path) => println!("  {} {}", "->".green(), path.display()),
        None => println!("  {} built-in defaults", "->".green()),
    }
    if config.dry_run {
        println!("  {} dry_run is enabled; nothing will be executed", "!!".yellow());
    }

    println!();

    if all_ok {
        println!("{} All checks passed!", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} Some checks failed. See above for details.",
            "WARNING".yellow().bold()
        );
        Ok(ExitCode::from(1))
    }
}

/// Status of the sox installation check
enum SoxStatus {
    Found {
        path: PathBuf,
        version: Option<String>,
    },
    NotFound,
    Error(String),
}

/// Parses the version from `sox --version` output such as `sox:      SoX v14.4.2`.
fn parse_sox_version(output: &str) -> Option<String> {
    output
        .split_whitespace()
        .filter_map(|word| word.strip_prefix('v'))
        .find(|v| v.starts_with(|c: char| c.is_ascii_digit()))
        .map(|v| v.to_string())
}

fn check_sox(sox: &str) -> SoxStatus {
    let path = match which::which(sox) {
        Ok(path) => path,
        Err(_) => return SoxStatus::NotFound,
    };

    match Command::new(&path).arg("--version").output() {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            SoxStatus::Found {
                path,
                version: parse_sox_version(&stdout),
            }
        }
        Ok(output) => SoxStatus::Error(format!("sox exited with status: {}", output.status)),
        Err(e) => SoxStatus::Error(e.to_string()),
    }
}
