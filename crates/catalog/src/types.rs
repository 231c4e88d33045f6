//! Core domain types for the movie catalog.
//!
//! - `Movie`: one immutable record from the dataset
//! - `Catalog`: the load-once snapshot, an ordered arena of movies plus an
//!   id index into it

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a movie.
///
/// Stored ids are always positive. The alias is signed because lookups and
/// searches receive ids straight from user input, where zero and negative
/// values must be representable (and then rejected or simply not found).
pub type MovieId = i64;

// =============================================================================
// Movie
// =============================================================================

/// A single film from the dataset.
///
/// Field names on the wire follow the dataset's camelCase layout; the only
/// rename beyond case is `duration` → `duration_minutes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub movie_name: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    pub description: String,
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    pub imdb_rating: f64,
}

// =============================================================================
// Catalog - The In-Memory Snapshot
// =============================================================================

/// The whole dataset, built once and read-only afterwards.
///
/// `movies` keeps dataset order and is the iteration source for search.
/// `by_id` maps each id to its position in `movies`, so every indexed entry
/// appears in the sequence exactly once and `movies[by_id[k]].id == k`.
///
/// There are no `&mut self` methods outside this crate: once a `Catalog` is
/// handed out (usually inside an `Arc`) it can be shared across threads
/// without locking.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    pub(crate) by_id: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Creates a catalog with no movies
    pub fn empty() -> Self {
        Self::default()
    }

    /// All movies in dataset order
    pub fn all_movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Direct index lookup.
    ///
    /// No validation of `id` happens here; callers that need the "ids must be
    /// positive" rule apply it before reaching the index.
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.by_id.get(&id).map(|&position| &self.movies[position])
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Append a movie and index it. Only used while building.
    pub(crate) fn insert_movie(&mut self, movie: Movie) {
        self.by_id.insert(movie.id, self.movies.len());
        self.movies.push(movie);
    }
}
