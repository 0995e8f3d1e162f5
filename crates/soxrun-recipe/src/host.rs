//! Capabilities the recipe core needs from its host application.

use std::path::PathBuf;

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message.
    #[default]
    Normal,
    /// Error the user should act on.
    Bad,
}

/// Options passed along with each command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOptions {
    /// Capture the tool's standard output as text instead of inheriting it.
    pub capture_stdout: bool,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            capture_stdout: true,
        }
    }
}

/// Supplies the files the user has selected.
pub trait SelectionProvider {
    /// The current selection, in order.
    fn selection(&self) -> Vec<PathBuf>;

    /// Clears every selection mark.
    fn clear_marks(&mut self);
}

/// Shows messages to the user.
pub trait Notifier {
    /// Shows `message` to the user with the given severity.
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Runs shell command lines.
///
/// Submission is fire-and-forget: implementations may return before the
/// command finishes, and nothing about the command's outcome flows back.
pub trait CommandExecutor {
    /// Dispatches `command_line`. An error means it could not be started.
    fn execute(&mut self, command_line: &str, options: &ExecOptions) -> std::io::Result<()>;
}

/// The full capability set used by [`crate::process_selection`].
pub trait Host: SelectionProvider + Notifier + CommandExecutor {}

impl<T: SelectionProvider + Notifier + CommandExecutor> Host for T {}
