//! The catalog-backed implementation of [`MovieQuery`].

use crate::criteria::SearchCriteria;
use crate::traits::MovieQuery;
use catalog::{Catalog, Movie, MovieId};
use std::sync::Arc;
use tracing::{debug, info};

/// Answers queries from a shared, immutable [`Catalog`].
///
/// Cloning is cheap: every clone points at the same catalog.
#[derive(Debug, Clone)]
pub struct MovieService {
    /// Shared reference to the catalog (read-only, so no Mutex needed)
    catalog: Arc<Catalog>,
}

impl MovieService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}

impl MovieQuery for MovieService {
    fn all_movies(&self) -> &[Movie] {
        self.catalog.all_movies()
    }

    fn movie_by_id(&self, id: Option<MovieId>) -> Option<&Movie> {
        // Non-positive ids never reach the index
        let id = id.filter(|&id| id > 0)?;
        let movie = self.catalog.get(id);
        debug!("Lookup of movie {} found: {}", id, movie.is_some());
        movie
    }

    fn search_movies(&self, criteria: &SearchCriteria) -> Vec<&Movie> {
        info!(
            "Searching movies with criteria - name: {:?}, id: {:?}, genre: {:?}",
            criteria.name, criteria.id, criteria.genre
        );
        let results = criteria.filter(self.catalog.all_movies());
        info!("Found {} movies matching search criteria", results.len());
        results
    }
}
