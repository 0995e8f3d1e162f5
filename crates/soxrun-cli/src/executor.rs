//! Command executors.
//!
//! [`ShellExecutor`] spawns each command line through a shell and returns
//! immediately. Children can be reaped later with [`ShellExecutor::finish`],
//! which only logs their outcome.

use std::io;
use std::process::{Child, Command, Stdio};

use soxrun_recipe::{CommandExecutor, ExecOptions};
use tracing::{debug, info, warn};

use crate::config::DEFAULT_SHELL;

/// Where a spawned child's stdout goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StdoutMode {
    Inherit,
    Piped,
    Discard,
}

impl StdoutMode {
    /// Without capture the child writes to the terminal. Captured output is
    /// collected by [`ShellExecutor::finish`], or dropped for detached children.
    fn for_child(wait: bool, options: &ExecOptions) -> Self {
        match (options.capture_stdout, wait) {
            (false, _) => StdoutMode::Inherit,
            (true, true) => StdoutMode::Piped,
            (true, false) => StdoutMode::Discard,
        }
    }
}

struct Dispatched {
    command_line: String,
    child: Child,
}

/// Runs command lines with `<shell> -c`.
pub struct ShellExecutor {
    shell: String,
    wait: bool,
    running: Vec<Dispatched>,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl ShellExecutor {
    /// Creates an executor using the given shell.
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            wait: true,
            running: Vec::new(),
        }
    }

    /// Whether children are kept for [`finish`](Self::finish).
    ///
    /// Detached children have captured stdout discarded.
    pub fn wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    /// Number of children still tracked.
    pub fn pending(&self) -> usize {
        self.running.len()
    }

    /// Waits for every tracked child and logs how it exited.
    ///
    /// Returns the number of children that did not exit successfully.
    pub fn finish(&mut self) -> usize {
        let mut failures = 0;

        for Dispatched {
            command_line,
            child,
        } in self.running.drain(..)
        {
            match child.wait_with_output() {
                Ok(output) => {
                    if !output.stdout.is_empty() {
                        debug!(
                            command = %command_line,
                            stdout = %String::from_utf8_lossy(&output.stdout).trim_end(),
                            "command output"
                        );
                    }
                    if output.status.success() {
                        info!(command = %command_line, "command finished");
                    } else {
                        failures += 1;
                        warn!(command = %command_line, status = %output.status, "command failed");
                    }
                }
                Err(err) => {
                    failures += 1;
                    warn!(command = %command_line, error = %err, "failed to wait for command");
                }
            }
        }

        failures
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&mut self, command_line: &str, options: &ExecOptions) -> io::Result<()> {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command_line).stdin(Stdio::null());

        match StdoutMode::for_child(self.wait, options) {
            StdoutMode::Inherit => {}
            StdoutMode::Piped => {
                cmd.stdout(Stdio::piped());
            }
            StdoutMode::Discard => {
                cmd.stdout(Stdio::null());
            }
        }

        let child = cmd.spawn()?;
        debug!(pid = child.id(), command = %command_line, "spawned");

        if self.wait {
            self.running.push(Dispatched {
                command_line: command_line.to_string(),
                child,
            });
        }
        Ok(())
    }
}

/// Accepts command lines without running them.
#[derive(Debug, Default)]
pub struct DryRun {
    /// Every command line submitted, in order.
    pub submitted: Vec<String>,
}

impl CommandExecutor for DryRun {
    fn execute(&mut self, command_line: &str, _options: &ExecOptions) -> io::Result<()> {
        debug!(command = %command_line, "dry run, not spawning");
        self.submitted.push(command_line.to_string());
        Ok(())
    }
}
