//! Invocation construction.
//!
//! Turns an operation and an input path into the one-line shell command
//! that runs sox on it.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RecipeError, RecipeResult};
use crate::host::ExecOptions;
use crate::naming::derive_output_path;
use crate::operation::{Operation, ParamPlacement, Recipe};

/// Default name of the external audio tool.
pub const DEFAULT_TOOL: &str = "sox";

/// A fully derived request to run sox on one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// The operation being applied.
    pub operation: Operation,
    /// The selected input file.
    pub input_path: PathBuf,
    /// Where sox will write its result.
    pub output_path: PathBuf,
    /// The assembled shell command line.
    pub command_line: String,
}

/// Builds sox command lines for a configured tool.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    tool: String,
    exec_options: ExecOptions,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBuilder {
    /// Creates a builder that invokes `sox` from PATH.
    pub fn new() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            exec_options: ExecOptions::default(),
        }
    }

    /// Sets the tool executable (name or path).
    pub fn tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Sets the options handed to the executor with every command.
    pub fn exec_options(mut self, options: ExecOptions) -> Self {
        self.exec_options = options;
        self
    }

    /// Returns the configured tool.
    pub fn tool_name(&self) -> &str {
        &self.tool
    }

    /// Returns the execution options submitted with each command.
    pub fn options(&self) -> &ExecOptions {
        &self.exec_options
    }

    /// Builds the invocation for `input`, which must exist on disk.
    pub fn build(&self, operation: Operation, input: &Path) -> RecipeResult<InvocationRequest> {
        if !input.exists() {
            return Err(RecipeError::missing_input(input));
        }
        Ok(self.build_unchecked(operation, input))
    }

    /// Builds the invocation without touching the filesystem.
    pub fn build_unchecked(&self, operation: Operation, input: &Path) -> InvocationRequest {
        let recipe = operation.recipe();
        let output_path = derive_output_path(input, recipe.tag);
        let command_line = render_command_line(&self.tool, recipe, input, &output_path);
        debug!(%operation, command = %command_line, "built invocation");

        InvocationRequest {
            operation,
            input_path: input.to_path_buf(),
            output_path,
            command_line,
        }
    }
}

/// Builds the command line for a named operation using the default `sox` tool.
///
/// Fails with [`RecipeError::UnknownOperation`] for an unregistered name and
/// [`RecipeError::MissingInputFile`] when `input` does not exist.
pub fn build_command(operation_name: &str, input: &Path) -> RecipeResult<String> {
    let operation = Operation::from_name(operation_name)?;
    CommandBuilder::new()
        .build(operation, input)
        .map(|request| request.command_line)
}

fn render_command_line(tool: &str, recipe: &Recipe, input: &Path, output: &Path) -> String {
    let tool = shell_words::quote(tool);
    let input = quote_path(input);
    let output = quote_path(output);

    match recipe.placement {
        ParamPlacement::AfterOutput => format!("{tool} {input} {output} {}", recipe.params),
        ParamPlacement::BetweenPaths => format!("{tool} {input} {} {output}", recipe.params),
    }
}

/// Single-quotes a path for a POSIX shell.
pub fn quote_path(path: &Path) -> String {
    shell_quote(&path.to_string_lossy())
}

/// Single-quotes `s`, writing embedded quotes as `'\''`.
///
/// Unlike [`shell_words::quote`], the quotes are added even when `s` has no
/// shell metacharacters.
pub fn shell_quote(s: &str) -> String {
    match shell_words::quote(s) {
        Cow::Owned(quoted) => quoted,
        Cow::Borrowed(_) if s.is_empty() => "''".to_string(),
        Cow::Borrowed(plain) => format!("'{plain}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_params_after_output() {
        let req = CommandBuilder::new().build_unchecked(Operation::Normalize, Path::new("song.wav"));
        assert_eq!(req.output_path, PathBuf::from("song_n.wav"));
        assert_eq!(req.command_line, "sox 'song.wav' 'song_n.wav' --norm=-0.1");
    }

    #[test]
    fn test_params_between_paths() {
        let req = CommandBuilder::new().build_unchecked(Operation::To24Bit, Path::new("a.flac"));
        assert_eq!(req.command_line, "sox 'a.flac' -b 24 'a_24bit.flac'");
    }

    #[test]
    fn test_split_clause_is_verbatim() {
        let req =
            CommandBuilder::new().build_unchecked(Operation::SplitBySilence, Path::new("set.wav"));
        assert_eq!(
            req.command_line,
            "sox 'set.wav' 'set_split.wav' silence 1 0.1 1% 1 0.1 1% : newfile : restart"
        );
    }

    #[test]
    fn test_spaces_survive_quoting() {
        let req = CommandBuilder::new()
            .build_unchecked(Operation::Reverse, Path::new("/my music/old take.wav"));
        assert_eq!(
            req.command_line,
            "sox '/my music/old take.wav' '/my music/old take_rev.wav' reverse"
        );
    }

    #[test]
    fn test_embedded_quote_is_escaped() {
        assert_eq!(shell_quote("don't.wav"), r"'don'\''t.wav'");
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn test_custom_tool() {
        let builder = CommandBuilder::new().tool("/opt/sox-14.4/bin/sox");
        let req = builder.build_unchecked(Operation::Fade, Path::new("x.wav"));
        assert_eq!(
            req.command_line,
            "/opt/sox-14.4/bin/sox 'x.wav' 'x_faded.wav' fade t 0.01 0 0.01"
        );

        let builder = CommandBuilder::new().tool("/Applications/Sox App/sox");
        let req = builder.build_unchecked(Operation::Fade, Path::new("x.wav"));
        assert!(req
            .command_line
            .starts_with("'/Applications/Sox App/sox' 'x.wav'"));
    }

    #[test]
    fn test_tool_with_assignment_is_quoted() {
        let builder = CommandBuilder::new().tool("SOX=1");
        let req = builder.build_unchecked(Operation::Reverse, Path::new("in.wav"));
        assert_eq!(req.command_line, "'SOX=1' 'in.wav' 'in_rev.wav' reverse");
    }

    #[test]
    fn test_tool_with_metacharacters_is_quoted() {
        for tool in ["sox;rm", "$SOX", "so x", "sox|tee"] {
            let req = CommandBuilder::new()
                .tool(tool)
                .build_unchecked(Operation::Reverse, Path::new("in.wav"));
            assert!(
                req.command_line.starts_with('\''),
                "{tool} was not quoted: {}",
                req.command_line
            );
        }
    }

    #[test]
    fn test_build_command_unknown_operation() {
        let err = build_command("louder", Path::new("whatever.wav")).unwrap_err();
        assert_eq!(err, RecipeError::unknown_operation("louder"));
    }

    #[test]
    fn test_build_command_missing_file() {
        let missing = Path::new("/definitely/not/here/song.wav");
        let err = build_command("normalize", missing).unwrap_err();
        assert_eq!(err, RecipeError::missing_input(missing));
    }
}
