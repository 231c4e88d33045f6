//! Error types for the catalog crate.
//!
//! Every variant describes a reason the whole dataset was rejected. The
//! catalog never keeps a partially loaded document, so callers either get a
//! complete `Catalog` or one of these.

use crate::types::MovieId;
use thiserror::Error;

/// Errors that can occur while loading the movie dataset
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Dataset file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the dataset
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document is not a JSON array of well-formed movie objects
    ///
    /// `source_name` is the file path, or `"bundled"` for the compiled-in dataset.
    #[error("Parse error in {source_name} at line {line}, column {column}: {reason}")]
    ParseError {
        source_name: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// A movie field had a value outside its domain
    #[error("Invalid value for {field} of movie {id}: {value}")]
    InvalidValue {
        id: MovieId,
        field: String,
        value: String,
    },

    /// Two entries share the same id
    #[error("Duplicate movie id {0}")]
    DuplicateId(MovieId),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
