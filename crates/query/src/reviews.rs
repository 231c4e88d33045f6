//! Reviews and the in-memory review store.
//!
//! The catalog never owns reviews. Front-ends ask a [`ReviewSource`] for the
//! reviews of one movie and render whatever comes back, including nothing.

use crate::traits::ReviewSource;
use catalog::MovieId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// One user review of one movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub movie_id: MovieId,
    pub user_name: String,
    /// Stars, 1 to 5
    pub rating: u8,
    pub comment: String,
}

/// Errors reading a reviews file
#[derive(Error, Debug)]
pub enum ReviewLoadError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid reviews document: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Reviews held in memory, grouped by movie.
///
/// Order within a movie follows insertion order.
#[derive(Debug, Default)]
pub struct InMemoryReviews {
    by_movie: HashMap<MovieId, Vec<Review>>,
}

impl InMemoryReviews {
    /// A store with no reviews at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(reviews: Vec<Review>) -> Self {
        let mut by_movie: HashMap<MovieId, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_movie.entry(review.movie_id).or_default().push(review);
        }
        Self { by_movie }
    }

    /// Parse a JSON array of reviews
    pub fn from_json_str(json: &str) -> Result<Self, ReviewLoadError> {
        let reviews: Vec<Review> = serde_json::from_str(json)?;
        Ok(Self::new(reviews))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ReviewLoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load `path` if given; a bad file is logged and yields an empty store.
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::empty();
        };
        match Self::load_from_file(path) {
            Ok(store) => {
                info!("Loaded reviews for {} movies from {:?}", store.by_movie.len(), path);
                store
            }
            Err(e) => {
                warn!("Failed to load reviews from {:?}, serving none: {}", path, e);
                Self::empty()
            }
        }
    }
}

impl ReviewSource for InMemoryReviews {
    fn reviews_for_movie(&self, movie_id: MovieId) -> Vec<Review> {
        self.by_movie.get(&movie_id).cloned().unwrap_or_default()
    }
}
