//! A small, fixed stand-in catalog for front-end tests.
//!
//! `FixtureMovies` implements [`MovieQuery`] without going through
//! `catalog::Catalog`, so handler tests don't depend on the bundled dataset.
//! Only built for this crate's tests or with the `test-fixtures` feature.

use crate::traits::MovieQuery;
use catalog::{Movie, MovieId};

pub struct FixtureMovies {
    movies: Vec<Movie>,
}

impl FixtureMovies {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Three movies: "Test Movie" (Drama), "Action Movie" (Action) and
    /// "Comedy Film" (Comedy), ids 1 to 3.
    pub fn sample() -> Self {
        Self::new(vec![
            fixture_movie(1, "Test Movie", "Test Director", 2023, "Drama", 120, 4.5),
            fixture_movie(2, "Action Movie", "Action Director", 2022, "Action", 110, 4.0),
            fixture_movie(3, "Comedy Film", "Comedy Director", 2021, "Comedy", 95, 3.5),
        ])
    }
}

impl MovieQuery for FixtureMovies {
    fn all_movies(&self) -> &[Movie] {
        &self.movies
    }

    fn movie_by_id(&self, id: Option<MovieId>) -> Option<&Movie> {
        let id = id.filter(|&id| id > 0)?;
        self.movies.iter().find(|movie| movie.id == id)
    }
}

fn fixture_movie(
    id: MovieId,
    name: &str,
    director: &str,
    year: i32,
    genre: &str,
    duration_minutes: u32,
    imdb_rating: f64,
) -> Movie {
    Movie {
        id,
        movie_name: name.to_string(),
        director: director.to_string(),
        year,
        genre: genre.to_string(),
        description: format!("{} description", genre),
        duration_minutes,
        imdb_rating,
    }
}
