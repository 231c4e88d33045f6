//! Capability traits at the seams of the query layer.
//!
//! Front-ends (web server, CLI) depend on these traits rather than on
//! `MovieService` directly, so tests can swap in a stand-in catalog.

use crate::criteria::SearchCriteria;
use crate::reviews::Review;
use catalog::{Movie, MovieId};

/// Read access to a movie catalog.
///
/// ## Design Note
/// - `Send + Sync` so one instance can sit behind an `Arc` shared by every
///   request handler
/// - All methods are pure reads and never fail; "nothing found" is an empty
///   result, not an error
pub trait MovieQuery: Send + Sync {
    /// Every movie in catalog order
    fn all_movies(&self) -> &[Movie];

    /// Point lookup.
    ///
    /// Returns `None` for an absent id and for ids `<= 0`, as well as for
    /// ids that are simply not in the catalog.
    fn movie_by_id(&self, id: Option<MovieId>) -> Option<&Movie>;

    /// Movies matching every constraint in `criteria`, in catalog order.
    ///
    /// The default scans [`MovieQuery::all_movies`].
    fn search_movies(&self, criteria: &SearchCriteria) -> Vec<&Movie> {
        criteria.filter(self.all_movies())
    }
}

/// Source of user reviews for a movie.
pub trait ReviewSource: Send + Sync {
    /// Reviews attached to `movie_id`; empty when there are none
    fn reviews_for_movie(&self, movie_id: MovieId) -> Vec<Review>;
}
