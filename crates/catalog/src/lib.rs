//! # Catalog Crate
//!
//! Loads the movie dataset once and exposes it read-only.
//!
//! ## Main Components
//!
//! - **types**: `Movie` and the `Catalog` snapshot
//! - **parser**: JSON dataset parsing and the bundled dataset
//! - **index**: building and validating a `Catalog`
//! - **error**: error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::sync::Arc;
//!
//! // Falls back to an empty catalog (and logs why) if the dataset is bad
//! let catalog = Arc::new(Catalog::initialize());
//!
//! let movie = catalog.get(1).unwrap();
//! println!("{} ({})", movie.movie_name, movie.year);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{CatalogError, Result};
pub use types::{Catalog, Movie, MovieId};
