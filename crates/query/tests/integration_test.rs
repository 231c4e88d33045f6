//! Integration tests for the query layer.
//!
//! These run lookups and searches against the bundled catalog the way the
//! front-ends do.

use catalog::{Catalog, Movie, MovieId};
use query::{MovieQuery, MovieService, SearchCriteria};
use std::sync::Arc;

fn create_service() -> MovieService {
    MovieService::new(Arc::new(Catalog::initialize()))
}

fn ids(movies: &[&Movie]) -> Vec<MovieId> {
    movies.iter().map(|m| m.id).collect()
}

#[test]
fn test_all_movies_matches_bundled_dataset() {
    let service = create_service();

    let movies = service.all_movies();
    assert_eq!(movies.len(), 12);
    for movie in movies {
        assert_eq!(service.movie_by_id(Some(movie.id)), Some(movie));
    }
}

#[test]
fn test_no_criteria_returns_whole_catalog_in_order() {
    let service = create_service();

    let all: Vec<&Movie> = service.all_movies().iter().collect();
    assert_eq!(service.search_movies(&SearchCriteria::new()), all);
}

#[test]
fn test_blank_criteria_equal_no_criteria() {
    let service = create_service();
    let unconstrained = service.search_movies(&SearchCriteria::new());

    let empty = SearchCriteria::new().with_name("").with_genre("");
    let whitespace = SearchCriteria::new().with_name("   ").with_genre("  ");

    assert_eq!(service.search_movies(&empty), unconstrained);
    assert_eq!(service.search_movies(&whitespace), unconstrained);
}

#[test]
fn test_search_by_name() {
    let service = create_service();

    let results = service.search_movies(&SearchCriteria::new().with_name("prison"));
    assert_eq!(results.len(), 1);
    assert!(results[0].movie_name.to_lowercase().contains("prison"));
}

#[test]
fn test_search_by_name_case_insensitive() {
    let service = create_service();

    let upper = service.search_movies(&SearchCriteria::new().with_name("FAMILY"));
    let lower = service.search_movies(&SearchCriteria::new().with_name("family"));

    assert_eq!(upper.len(), 1);
    assert_eq!(upper, lower);
}

#[test]
fn test_search_by_id() {
    let service = create_service();

    assert_eq!(ids(&service.search_movies(&SearchCriteria::new().with_id(1))), vec![1]);
    assert!(service.search_movies(&SearchCriteria::new().with_id(999)).is_empty());
    assert!(service.movie_by_id(Some(999)).is_none());
}

#[test]
fn test_genre_search_matches_predicate_exactly() {
    let service = create_service();

    for term in ["drama", " Sci ", "CRIME", "fantasy", "western"] {
        let results = service.search_movies(&SearchCriteria::new().with_genre(term));
        let expected: Vec<&Movie> = service
            .all_movies()
            .iter()
            .filter(|m| m.genre.to_lowercase().contains(&term.trim().to_lowercase()))
            .collect();
        assert_eq!(results, expected, "genre term {:?}", term);
    }

    assert!(!service
        .search_movies(&SearchCriteria::new().with_genre("sci"))
        .is_empty());
}

#[test]
fn test_combined_criteria_are_conjunctive() {
    let service = create_service();

    let results =
        service.search_movies(&SearchCriteria::new().with_name("family").with_genre("crime"));
    assert_eq!(results.len(), 1);
    assert!(results[0].movie_name.to_lowercase().contains("family"));
    assert!(results[0].genre.to_lowercase().contains("crime"));

    assert!(service
        .search_movies(&SearchCriteria::new().with_name("family").with_genre("drama"))
        .is_empty());
}

#[test]
fn test_no_matches() {
    let service = create_service();
    assert!(service
        .search_movies(&SearchCriteria::new().with_name("nonexistent"))
        .is_empty());
}

#[test]
fn test_reads_are_idempotent() {
    let service = create_service();
    let criteria = SearchCriteria::new().with_genre("action");

    assert_eq!(service.search_movies(&criteria), service.search_movies(&criteria));
    assert_eq!(service.movie_by_id(Some(3)), service.movie_by_id(Some(3)));
    assert_eq!(service.all_movies(), service.all_movies());
}

#[test]
fn test_concurrent_readers_share_one_catalog() {
    let service = create_service();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = service.clone();
            std::thread::spawn(move || {
                service
                    .search_movies(&SearchCriteria::new().with_genre("drama"))
                    .len()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(counts.windows(2).all(|w| w[0] == w[1]));
}
