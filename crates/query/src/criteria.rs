//! Search criteria and matching.
//!
//! A search is up to three independent constraints joined with AND:
//! - `id`: exact equality
//! - `name`: case-insensitive substring of the movie name
//! - `genre`: case-insensitive substring of the genre
//!
//! Text terms are trimmed first. A blank term (empty or whitespace only)
//! imposes no constraint, so the default criteria match every movie.

use catalog::{Movie, MovieId};

/// Optional (name, id, genre) triple.
///
/// ## Usage
/// ```ignore
/// let criteria = SearchCriteria::new()
///     .with_name("family")
///     .with_genre("crime");
///
/// let hits = criteria.filter(catalog.all_movies());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub id: Option<MovieId>,
    pub genre: Option<String>,
}

impl SearchCriteria {
    /// Criteria with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Exact id constraint. Any value is accepted here, including `<= 0`,
    /// which just matches nothing.
    pub fn with_id(mut self, id: MovieId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Trimmed name term, or `None` when blank
    pub fn name_term(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Trimmed genre term, or `None` when blank
    pub fn genre_term(&self) -> Option<&str> {
        non_blank(self.genre.as_deref())
    }

    /// True when every movie would match
    pub fn is_unconstrained(&self) -> bool {
        self.id.is_none() && self.name_term().is_none() && self.genre_term().is_none()
    }

    /// Check a single movie against all constraints
    pub fn matches(&self, movie: &Movie) -> bool {
        self.matcher().matches(movie)
    }

    /// Keep the movies that match, preserving their order
    pub fn filter<'a>(&self, movies: &'a [Movie]) -> Vec<&'a Movie> {
        // Lower-case the terms once rather than per movie
        let matcher = self.matcher();
        movies.iter().filter(|movie| matcher.matches(movie)).collect()
    }

    /// Human-readable description of the applied constraints.
    ///
    /// Example: `Search results for name containing 'family' with ID 12 in genre 'crime'`
    pub fn summary(&self) -> String {
        let mut summary = String::from("Search results");
        if let Some(name) = self.name_term() {
            summary.push_str(&format!(" for name containing '{}'", name));
        }
        if let Some(id) = self.id {
            summary.push_str(&format!(" with ID {}", id));
        }
        if let Some(genre) = self.genre_term() {
            summary.push_str(&format!(" in genre '{}'", genre));
        }
        summary
    }

    fn matcher(&self) -> Matcher {
        Matcher {
            id: self.id,
            name: self.name_term().map(str::to_lowercase),
            genre: self.genre_term().map(str::to_lowercase),
        }
    }
}

/// Criteria with the text terms already normalized
struct Matcher {
    id: Option<MovieId>,
    name: Option<String>,
    genre: Option<String>,
}

impl Matcher {
    fn matches(&self, movie: &Movie) -> bool {
        self.id.is_none_or(|id| movie.id == id)
            && self
                .name
                .as_deref()
                .is_none_or(|name| movie.movie_name.to_lowercase().contains(name))
            && self
                .genre
                .as_deref()
                .is_none_or(|genre| movie.genre.to_lowercase().contains(genre))
    }
}

fn non_blank(term: Option<&str>) -> Option<&str> {
    term.map(str::trim).filter(|t| !t.is_empty())
}
