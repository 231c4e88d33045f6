//! Query layer over the movie catalog.
//!
//! This crate provides:
//! - `MovieQuery` and `ReviewSource`, the traits front-ends program against
//! - `MovieService`, the catalog-backed `MovieQuery`
//! - `SearchCriteria` for multi-criteria search
//! - `InMemoryReviews`, a `ReviewSource` loaded from JSON
//! - review submission validation
//! - `FixtureMovies`, a stand-in catalog for tests (`test-fixtures` feature)
//!
//! ## Example Usage
//! ```ignore
//! use catalog::Catalog;
//! use query::{MovieQuery, MovieService, SearchCriteria};
//! use std::sync::Arc;
//!
//! let service = MovieService::new(Arc::new(Catalog::initialize()));
//!
//! let movie = service.movie_by_id(Some(1));
//! let crime_dramas = service.search_movies(&SearchCriteria::new().with_genre("crime"));
//! ```

pub mod traits;
pub mod criteria;
pub mod service;
pub mod reviews;
pub mod validation;
#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixture;

// Re-export main types
pub use traits::{MovieQuery, ReviewSource};
pub use criteria::SearchCriteria;
pub use service::MovieService;
pub use reviews::{InMemoryReviews, Review, ReviewLoadError};
pub use validation::{ReviewRejection, ReviewRequest, validate_review};
#[cfg(any(test, feature = "test-fixtures"))]
pub use fixture::FixtureMovies;
