//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal settings warning surfaced to CLI users.
///
/// Raised while loading `config.toml` (e.g., unknown keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown or problematic key
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}
