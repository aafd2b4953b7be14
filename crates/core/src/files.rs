//! Text input and output for files and standard streams.
//!
//! Conversion itself never touches the file system; these helpers read the
//! source text once and write the result once.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Result, YambookError};

/// Reads a whole text file.
///
/// # Errors
///
/// Returns [`YambookError::FileNotFound`] if the path does not exist.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(YambookError::FileNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read input file");
    Ok(text)
}

/// Reads all of standard input until EOF.
pub fn read_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}

/// Writes text to a file, creating missing parent directories.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote output file");
    Ok(())
}
