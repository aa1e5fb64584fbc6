//! File helpers for emitting HTML fragments.

use std::{fs, io, path::Path};

use crate::process::convert;

/// Convert a Markdown file and return the fragment.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_fragment(path: &Path) -> io::Result<String> {
    Ok(convert(&fs::read_to_string(path)?))
}

/// Convert a Markdown file and write the fragment beside it with an
/// `.html` extension.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn write_fragment(path: &Path) -> io::Result<()> {
    let html = read_fragment(path)?;
    fs::write(path.with_extension("html"), html + "\n")
}
