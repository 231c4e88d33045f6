//! Shared application state handed to every handler.

use catalog::Catalog;
use query::{InMemoryReviews, MovieQuery, MovieService, ReviewSource};
use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;

/// The query backends, behind traits so tests can substitute fixtures
#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieQuery>,
    pub reviews: Arc<dyn ReviewSource>,
}

impl AppState {
    pub fn new(movies: Arc<dyn MovieQuery>, reviews: Arc<dyn ReviewSource>) -> Self {
        Self { movies, reviews }
    }

    /// Load the catalog and reviews named by `config`.
    ///
    /// Load failures are logged inside the loaders and leave the
    /// corresponding store empty; this never fails.
    pub fn from_config(config: &ServerConfig) -> Self {
        let catalog = Arc::new(Catalog::initialize_from(config.data_file.as_deref()));
        info!("Catalog ready with {} movies", catalog.len());

        let reviews = InMemoryReviews::load_or_empty(config.reviews_file.as_deref());

        Self::new(Arc::new(MovieService::new(catalog)), Arc::new(reviews))
    }
}
