//! Terminal host: selection from arguments and a marks file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use soxrun_recipe::{CommandExecutor, ExecOptions, Notifier, SelectionProvider, Severity};
use tracing::warn;

/// Host backed by the command line.
///
/// The selection is the explicit file arguments followed by the entries of
/// an optional marks file (one path per line). Clearing marks truncates
/// that file.
pub struct CliHost<E> {
    selection: Vec<PathBuf>,
    marks_file: Option<PathBuf>,
    executor: E,
}

impl<E: CommandExecutor> CliHost<E> {
    /// Creates a host over a fixed selection.
    pub fn new(selection: Vec<PathBuf>, executor: E) -> Self {
        Self {
            selection,
            marks_file: None,
            executor,
        }
    }

    /// Creates a host from file arguments and an optional marks file.
    pub fn from_args(files: &[PathBuf], marks_file: Option<&Path>, executor: E) -> Result<Self> {
        let mut selection = files.to_vec();
        if let Some(path) = marks_file {
            let marked = read_marks_file(path)
                .with_context(|| format!("Failed to read selection file: {}", path.display()))?;
            selection.extend(marked);
        }

        Ok(Self {
            selection,
            marks_file: marks_file.map(Path::to_path_buf),
            executor,
        })
    }

    /// Consumes the host, returning the executor.
    pub fn into_executor(self) -> E {
        self.executor
    }
}

/// Reads one path per line, skipping blank lines.
pub fn read_marks_file(path: &Path) -> io::Result<Vec<PathBuf>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(PathBuf::from)
        .collect())
}

impl<E> SelectionProvider for CliHost<E> {
    fn selection(&self) -> Vec<PathBuf> {
        self.selection.clone()
    }

    fn clear_marks(&mut self) {
        self.selection.clear();
        if let Some(ref path) = self.marks_file {
            if let Err(err) = fs::write(path, "") {
                warn!(path = %path.display(), error = %err, "failed to clear selection file");
            }
        }
    }
}

impl<E> Notifier for CliHost<E> {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Normal => println!("{} {}", "->".green(), message),
            Severity::Bad => eprintln!("{} {}", "error:".red().bold(), message),
        }
    }
}

impl<E: CommandExecutor> CommandExecutor for CliHost<E> {
    fn execute(&mut self, command_line: &str, options: &ExecOptions) -> io::Result<()> {
        self.executor.execute(command_line, options)
    }
}
