//! Error types for yambook operations.
//!
//! This module defines the main error type [`YambookError`]. Parsing a bookmark
//! file and generating one never fail on missing data: an absent list container or
//! attribute degrades to an empty or absent value. Errors only come from the YAML
//! codec and from the file helpers.
//!
//! # Example
//!
//! ```rust
//! use yambook_core::{YambookError, from_yaml};
//!
//! match from_yaml("folder: [unterminated") {
//!     Ok(forest) => println!("{} top-level nodes", forest.len()),
//!     Err(YambookError::MalformedDocument(e)) => println!("bad YAML: {}", e),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bookmark conversion.
#[derive(Error, Debug)]
pub enum YambookError {
    /// The YAML document stream could not be parsed or produced.
    ///
    /// The codec does not attempt partial recovery; a syntactically broken
    /// stream fails as a whole.
    #[error("Malformed YAML document: {0}")]
    MalformedDocument(#[from] serde_yaml::Error),

    /// The tree nests deeper than a YAML document can be read back.
    #[error("Bookmark tree nests {depth} levels deep, YAML documents allow at most {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    /// File not found.
    ///
    /// Returned when attempting to read a file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Read or write failure on a file or stdin.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for YambookError.
///
/// This is a convenience alias for `std::result::Result<T, YambookError>`.
pub type Result<T> = std::result::Result<T, YambookError>;
