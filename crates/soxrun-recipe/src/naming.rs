//! Output file naming.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Derives the output path for `input` by inserting `tag` before the extension.
///
/// The result lives in the same directory and keeps the same extension;
/// only the stem changes. No check is made that the result is unused.
///
/// A leading dot does not start an extension (`.wav` has none) and a
/// trailing dot stays in the stem (`a.` becomes `a._n`).
///
/// A path without a file name (`..`, `.`, `/`) is named in its parent: the
/// stem is `..` when the path ends in `..` and empty otherwise.
pub fn derive_output_path(input: &Path, tag: &str) -> PathBuf {
    if input.file_name().is_none() {
        return derive_from_nameless(input, tag);
    }

    let extension = input.extension().filter(|ext| !ext.is_empty());

    let stem = match extension {
        Some(_) => input.file_stem(),
        None => input.file_name(),
    };

    let mut name = OsString::new();
    if let Some(stem) = stem {
        name.push(stem);
    }
    name.push(tag);
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }

    input.with_file_name(name)
}

fn derive_from_nameless(input: &Path, tag: &str) -> PathBuf {
    let mut name = OsString::new();
    if let Some(Component::ParentDir) = input.components().next_back() {
        name.push("..");
    }
    name.push(tag);

    match input.parent() {
        Some(parent) => parent.join(name),
        None => input.join(name),
    }
}
