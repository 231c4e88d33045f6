//! Catalog building and validation.
//!
//! Loading happens in three steps:
//! 1. Read the document (bundled or from disk)
//! 2. Parse every entry
//! 3. Validate and index
//!
//! A failure at any step rejects the whole document. The `initialize*`
//! entry points turn that rejection into a logged, empty catalog so the
//! rest of the application can keep serving.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{error, info};

impl Catalog {
    /// Build a catalog from the dataset compiled into the binary.
    ///
    /// Never fails: a rejected dataset is logged and yields an empty catalog.
    pub fn initialize() -> Self {
        Self::or_empty(Self::parse_named(
            parser::BUNDLED_MOVIES,
            parser::BUNDLED_SOURCE,
        ))
    }

    /// Like [`Catalog::initialize`], but reads `path` when one is given.
    pub fn initialize_from(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::or_empty(Self::load_from_file(path)),
            None => Self::initialize(),
        }
    }

    /// Parse and index a JSON document held in memory
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse_named(json, parser::STRING_SOURCE)
    }

    /// Read, parse and index a dataset file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie dataset from {:?}", path);
        let json = parser::read_dataset(path)?;
        Self::parse_named(&json, &path.display().to_string())
    }

    /// Index already-constructed movies, keeping their order.
    ///
    /// Rejects the whole list if any id is non-positive or repeated.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut catalog = Catalog::empty();
        for movie in movies {
            validate_movie(&movie)?;
            if catalog.by_id.contains_key(&movie.id) {
                return Err(CatalogError::DuplicateId(movie.id));
            }
            catalog.insert_movie(movie);
        }
        Ok(catalog)
    }

    fn parse_named(json: &str, source_name: &str) -> Result<Self> {
        let movies = parser::parse_movies(json, source_name)?;
        let catalog = Self::from_movies(movies)?;
        info!("Loaded {} movies from {}", catalog.len(), source_name);
        Ok(catalog)
    }

    fn or_empty(result: Result<Self>) -> Self {
        result.unwrap_or_else(|e| {
            error!("Failed to load movies, continuing with an empty catalog: {}", e);
            Catalog::empty()
        })
    }
}

/// Field-level checks that keep the id index sound
fn validate_movie(movie: &Movie) -> Result<()> {
    if movie.id <= 0 {
        return Err(CatalogError::InvalidValue {
            id: movie.id,
            field: "id".to_string(),
            value: movie.id.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, name: &str) -> Movie {
        Movie {
            id,
            movie_name: name.to_string(),
            director: "Someone".to_string(),
            year: 2000,
            genre: "Drama".to_string(),
            description: "A film.".to_string(),
            duration_minutes: 100,
            imdb_rating: 7.5,
        }
    }

    fn assert_index_consistent(catalog: &Catalog) {
        assert_eq!(catalog.by_id.len(), catalog.movies.len());
        for (&id, &position) in &catalog.by_id {
            assert_eq!(catalog.movies[position].id, id);
        }
    }

    #[test]
    fn test_initialize_loads_bundled_dataset() {
        let catalog = Catalog::initialize();

        assert_eq!(catalog.len(), 12);
        assert_index_consistent(&catalog);
        assert_eq!(catalog.get(1).unwrap().movie_name, "The Shawshank Redemption");
    }

    #[test]
    fn test_from_movies_preserves_order() {
        let catalog =
            Catalog::from_movies(vec![movie(3, "C"), movie(1, "A"), movie(2, "B")]).unwrap();

        let ids: Vec<MovieId> = catalog.all_movies().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_index_consistent(&catalog);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::from_movies(vec![movie(1, "A"), movie(1, "B")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_non_positive_id_rejected() {
        let err = Catalog::from_movies(vec![movie(0, "Zero")]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { .. }));
    }

    #[test]
    fn test_malformed_file_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{\"id\": 1, \"movieName\": ").unwrap();

        let catalog = Catalog::initialize_from(Some(&path));
        assert!(catalog.is_empty());
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_string_parse_errors_name_string_source() {
        match Catalog::from_json_str("not json").unwrap_err() {
            CatalogError::ParseError { source_name, .. } => {
                assert_eq!(source_name, parser::STRING_SOURCE)
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_parse_errors_name_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        match Catalog::load_from_file(&path).unwrap_err() {
            CatalogError::ParseError { source_name, .. } => {
                assert_eq!(source_name, path.display().to_string())
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_yields_empty_catalog() {
        let catalog = Catalog::initialize_from(Some(Path::new("no/such/movies.json")));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_no_override_uses_bundled_dataset() {
        assert_eq!(Catalog::initialize_from(None).len(), 12);
    }
}
