//! Request handlers.
//!
//! Each handler calls the query layer and renders a view; anything that
//! should become an error page is returned as an [`AppError`].

use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{Html, Redirect},
};
use catalog::{Movie, MovieId};
use query::SearchCriteria;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::AppState;
use crate::views::{self, SearchEcho};

/// Raw search query string.
///
/// `id` stays text so an empty `id=` (as sent by an empty form field) can
/// be treated as absent rather than rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub id: Option<String>,
    pub genre: Option<String>,
}

pub async fn index() -> Redirect {
    Redirect::to("/movies")
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn list_movies(State(state): State<AppState>) -> Html<String> {
    info!("Fetching movies");
    Html(views::movies_page(state.movies.all_movies(), None))
}

pub async fn movie_details(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, AppError> {
    info!("Fetching details for movie ID: {}", raw_id);

    let id: MovieId = raw_id
        .parse()
        .map_err(|_| AppError::InvalidMovieId(raw_id.clone()))?;

    let movie = state
        .movies
        .movie_by_id(Some(id))
        .ok_or_else(|| AppError::MovieNotFound(id.to_string()))?;

    let reviews = state.reviews.reviews_for_movie(movie.id);
    Ok(Html(views::details_page(movie, &reviews)))
}

pub async fn search_movies(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(params) = query.map_err(|rejection| {
        warn!("Unreadable search query: {}", rejection.body_text());
        AppError::InvalidSearch("Search parameters could not be read.".to_string())
    })?;
    info!(
        "Movie search request - name: {:?}, id: {:?}, genre: {:?}",
        params.name, params.id, params.genre
    );

    let id = parse_search_id(params.id.as_deref())?;
    if let Some(id) = id.filter(|&id| id <= 0) {
        warn!("Invalid movie ID provided: {}", id);
        return Err(AppError::InvalidSearch(
            "Movie ID must be a positive number.".to_string(),
        ));
    }

    let criteria = SearchCriteria {
        name: params.name.clone(),
        id,
        genre: params.genre.clone(),
    };

    // Run the scan on the blocking pool; a panic there becomes a JoinError
    // instead of taking the connection down.
    let movies = state.movies.clone();
    let task_criteria = criteria.clone();
    let results: Vec<Movie> = tokio::task::spawn_blocking(move || {
        movies
            .search_movies(&task_criteria)
            .into_iter()
            .cloned()
            .collect::<Vec<Movie>>()
    })
    .await
    .map_err(|e| AppError::SearchFailed(e.to_string()))?;

    let echo = SearchEcho {
        name: params.name.unwrap_or_default(),
        id: id.map(|id| id.to_string()).unwrap_or_default(),
        genre: params.genre.unwrap_or_default(),
        result_count: results.len(),
        summary: criteria.summary(),
    };

    info!("Search completed successfully, found {} movies", results.len());
    Ok(Html(views::movies_page(&results, Some(&echo))))
}

/// Blank means "no id"; anything else must be an integer
fn parse_search_id(raw: Option<&str>) -> Result<Option<MovieId>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(text) => text.parse().map(Some).map_err(|_| {
            warn!("Non-numeric movie ID provided: {}", text);
            AppError::InvalidSearch("Movie ID must be a positive number.".to_string())
        }),
    }
}
