//! Error types for recipe lookup and command construction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for recipe operations.
pub type RecipeResult<T> = Result<T, RecipeError>;

/// Errors that can occur while turning a selection into sox invocations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeError {
    /// A selected input file does not exist at processing time.
    #[error("The given file does not exist: {}", path.display())]
    MissingInputFile { path: PathBuf },

    /// No recipe is registered under the requested name.
    #[error("Unknown operation '{name}'. Run `soxrun list` to see the available operations")]
    UnknownOperation { name: String },
}

impl RecipeError {
    /// Creates a new missing input file error.
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInputFile { path: path.into() }
    }

    /// Creates a new unknown operation error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            RecipeError::MissingInputFile { .. } => "RECIPE_001",
            RecipeError::UnknownOperation { .. } => "RECIPE_002",
        }
    }

    /// Error category used when grouping diagnostics.
    pub fn category(&self) -> &'static str {
        "recipe"
    }
}
