//! Run command implementation
//!
//! Applies one operation to every selected file.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use soxrun_recipe::{process_selection, BatchReport, CommandExecutor, Operation};

use crate::config::Config;
use crate::executor::{DryRun, ShellExecutor};
use crate::host::CliHost;

/// Apply one operation to every selected file
///
/// # Arguments
/// * `operation` - Operation name or alias
/// * `files` - Files selected on the command line
/// * `selection_file` - Optional marks file, truncated when done
/// * `config` - Effective configuration
///
/// # Returns
/// Exit code: 0 if every file was dispatched, 1 if the batch aborted
pub fn run(
    operation: &str,
    files: &[PathBuf],
    selection_file: Option<&Path>,
    config: &Config,
) -> Result<ExitCode> {
    let operation = Operation::from_name(operation)?;

    let report = if config.dry_run {
        let host = CliHost::from_args(files, selection_file, DryRun::default())?;
        dispatch(host, operation, config).0
    } else {
        let executor = ShellExecutor::new(config.shell.clone()).wait(config.wait);
        let host = CliHost::from_args(files, selection_file, executor)?;
        let (report, mut executor) = dispatch(host, operation, config);
        let failures = executor.finish();
        if failures > 0 {
            info!(failures, "some commands exited unsuccessfully");
        }
        report
    };

    print_summary(&report, config.dry_run);

    if report.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn dispatch<E: CommandExecutor>(
    mut host: CliHost<E>,
    operation: Operation,
    config: &Config,
) -> (BatchReport, E) {
    let builder = config.command_builder();
    let report = process_selection(&mut host, operation, &builder);
    (report, host.into_executor())
}

fn print_summary(report: &BatchReport, dry_run: bool) {
    let count = report.submitted.len();
    let noun = if count == 1 { "file" } else { "files" };

    if report.submitted.is_empty() && report.is_complete() {
        println!("{} Nothing selected", "!!".yellow());
    } else if dry_run {
        println!("{} {} {} (dry run)", "DRY RUN".cyan().bold(), count, noun);
    } else if report.is_complete() {
        println!("{} Dispatched {} {}", "SUCCESS".green().bold(), count, noun);
    } else {
        println!(
            "{} Dispatched {} {} before stopping",
            "ABORTED".red().bold(),
            count,
            noun
        );
    }
}
