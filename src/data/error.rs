//! Dataset error types
//!
//! Every variant is fatal at startup; nothing on the load path is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the wildfire dataset
#[derive(Error, Debug)]
pub enum DataError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("Failed to fetch dataset: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Dataset request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Local file could not be read
    #[error("Failed to read dataset file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Malformed CSV row or non-numeric metric
    #[error("CSV error on line {line}: {message}")]
    Csv { line: u64, message: String },

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Date column could not be parsed
    #[error("Invalid date on line {line}: {value:?}")]
    InvalidDate { line: u64, value: String },
}

/// Result type alias for dataset operations
pub type DataResult<T> = Result<T, DataError>;
