//! Error types for the PyGrid CLI
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for PyGrid CLI operations
pub type PygridResult<T> = Result<T, PygridError>;

/// Main error type for PyGrid CLI operations
#[derive(Error, Debug)]
pub enum PygridError {
    /// The API base URL could not be parsed
    #[error("invalid API URL '{url}': {message}")]
    InvalidApiUrl { url: String, message: String },

    /// Health probe against the API failed
    #[error("API at {url} is unreachable: {reason}")]
    ApiUnreachable { url: String, reason: String },

    /// Cloud credentials file is missing or not valid JSON
    #[error("invalid credentials file {path}: {reason}")]
    InvalidCredentials { path: PathBuf, reason: String },

    /// Deploy endpoint answered with a non-200 status
    #[error("deployment was rejected by the API (HTTP {status})")]
    DeployRejected { status: u16 },

    /// Status endpoint answered with a non-200 status
    #[error("there was an error in reaching the API (HTTP {status})")]
    StatusUnavailable { status: u16 },

    /// `--output-file` is not a plain file name inside the output root
    #[error("invalid output file name '{name}': {reason}")]
    InvalidOutputFile { name: String, reason: &'static str },

    /// Output file could not be written
    #[error("failed to write configuration to {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Home directory could not be resolved
    #[error("could not determine user home directory")]
    HomeDirUnavailable,

    /// A configuration field was set twice
    #[error("configuration field '{field}' is already set")]
    FieldAlreadySet { field: &'static str },

    /// The configuration document violates a field-presence rule
    #[error("invalid deployment configuration: {0}")]
    Invariant(String),

    /// Settings file could not be parsed
    #[error("invalid settings file {file}: {message}")]
    Settings { file: PathBuf, message: String },

    /// Interactive prompt failed (closed stdin, not a terminal, ...)
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Transport-level HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
