//! soxrun Recipe Registry
//!
//! This crate turns a file-manager selection into sox invocations. Every
//! operation follows the same recipe: insert a tag into the file name to get
//! the output path, assemble a one-line sox command, and hand it to the host
//! to run.
//!
//! # Operations
//!
//! | Operation | Alias | Tag | Parameters |
//! |-----------|-------|-----|------------|
//! | `normalize` | `norm` | `_n` | `--norm=-0.1` |
//! | `trim` | `trim` | `_t` | `silence -l 1 0.125 1% -1 2.0 1%` |
//! | `split-by-silence` | `splitbysilence` | `_split` | `silence 1 0.1 1% 1 0.1 1% : newfile : restart` |
//! | `stereo-to-mono` | `stereo2mono` | `_mono` | `remix 1,2` |
//! | `fade` | `fade` | `_faded` | `fade t 0.01 0 0.01` |
//! | `reverse` | `reverse` | `_rev` | `reverse` |
//! | `to-1-channel` | `channels1` | `_1chan` | `channels 1` |
//! | `to-4-channel` | `channels4` | `_4chan` | `channels 4` |
//! | `resample-48k` | `samplerate48k` | `_48khz` | `rate 48k` |
//! | `to-16-bit` | `bitrate16` | `_16bit` | `-b 16` (between paths) |
//! | `to-24-bit` | `bitrate24` | `_24bit` | `-b 24` (between paths) |
//!
//! Output files are never checked for existence; running an operation twice
//! targets the same output path and sox overwrites the earlier result.
//!
//! # Example
//!
//! ```
//! use soxrun_recipe::{CommandBuilder, Operation};
//! use std::path::Path;
//!
//! let request = CommandBuilder::new().build_unchecked(Operation::Normalize, Path::new("song.wav"));
//! assert_eq!(request.command_line, "sox 'song.wav' 'song_n.wav' --norm=-0.1");
//! ```
//!
//! # Crate Structure
//!
//! - [`operation`] - The operation enum and static recipe table
//! - [`naming`] - Output path derivation
//! - [`command`] - Command line construction and quoting
//! - [`host`] - Capability traits implemented by the host
//! - [`selection`] - Sequential processing of a selection
//! - [`error`] - Error types

pub mod command;
pub mod error;
pub mod host;
pub mod naming;
pub mod operation;
pub mod selection;

// Re-export main types at crate root
pub use command::{build_command, CommandBuilder, InvocationRequest, DEFAULT_TOOL};
pub use error::{RecipeError, RecipeResult};
pub use host::{CommandExecutor, ExecOptions, Host, Notifier, SelectionProvider, Severity};
pub use naming::derive_output_path;
pub use operation::{Operation, ParamPlacement, Recipe, RECIPES};
pub use selection::{process_selection, process_selection_named, BatchReport};
