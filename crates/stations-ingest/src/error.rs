//! Error types for station data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the station file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Station file not found.
    #[error("station file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File starts with a byte order mark for an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Input has no header row.
    #[error("no header row found")]
    MissingHeader,

    /// The CSV reader rejected a row (invalid UTF-8, broken quoting, I/O).
    #[error("failed to parse row {row}: {message}")]
    Csv { row: usize, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
