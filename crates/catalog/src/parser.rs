//! Parser for the movie dataset.
//!
//! The dataset is a JSON array of objects:
//!
//! ```json
//! [{ "id": 1, "movieName": "...", "director": "...", "year": 1994,
//!    "genre": "Drama", "description": "...", "duration": 142, "imdbRating": 9.3 }]
//! ```
//!
//! Unknown extra fields are ignored. A missing or mistyped field anywhere in
//! the document fails the whole parse.

use crate::error::{CatalogError, Result};
use crate::types::Movie;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// The dataset shipped with the binary
pub const BUNDLED_MOVIES: &str = include_str!("../data/movies.json");

/// Name used in errors for the compiled-in dataset
pub const BUNDLED_SOURCE: &str = "bundled";

/// Name used in errors for documents passed in as strings
pub const STRING_SOURCE: &str = "<string>";

/// Read a dataset file into memory
pub fn read_dataset(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })
}

/// Parse a JSON document into movies, keeping document order.
///
/// # Arguments
/// * `json` - the raw document
/// * `source_name` - where it came from, for error messages
pub fn parse_movies(json: &str, source_name: &str) -> Result<Vec<Movie>> {
    serde_json::from_str::<Vec<Movie>>(json).map_err(|e| CatalogError::ParseError {
        source_name: source_name.to_string(),
        line: e.line(),
        column: e.column(),
        reason: e.to_string(),
    })
}
