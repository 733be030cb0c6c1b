//! Error types for cost table ingestion.

use std::path::PathBuf;
use thiserror::Error;

use munkres_model::MatrixError;

/// Errors that can occur while loading, editing or saving cost tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to open or read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write a file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error on a caller-supplied reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === CSV Errors ===
    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field is neither blank nor an integer.
    #[error("invalid cost '{value}' at row {row}, column {col}")]
    InvalidCell {
        row: usize,
        col: usize,
        value: String,
    },

    // === Table Errors ===
    /// The table has no cells at all.
    #[error("cost table is empty")]
    EmptyTable,

    /// A cell has not been filled in.
    #[error("cost table is not filled: missing value at row {row}, column {col}")]
    MissingCell { row: usize, col: usize },

    /// An edit addressed a cell outside the table.
    #[error("cell ({row}, {col}) is outside the table")]
    OutOfBounds { row: usize, col: usize },

    /// The padded table failed cost matrix validation.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
