//! Errors surfaced to the browser as rendered error views.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

/// Message shown for any unexpected search failure; never carries detail
const SEARCH_FAILED_MESSAGE: &str = "An error occurred while searching for movies. Please try again.";

#[derive(Error, Debug)]
pub enum AppError {
    /// Lookup found nothing for this id (kept as received)
    #[error("Movie with ID {0} was not found.")]
    MovieNotFound(String),

    /// The details path did not carry a number
    #[error("Movie ID '{0}' is not a number.")]
    InvalidMovieId(String),

    /// Search rejected before it ran
    #[error("{0}")]
    InvalidSearch(String),

    /// The search itself failed; the detail is for logs only
    #[error("Search failed: {0}")]
    SearchFailed(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MovieNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidMovieId(_) | AppError::InvalidSearch(_) => StatusCode::BAD_REQUEST,
            AppError::SearchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppError::MovieNotFound(_) => "Movie Not Found",
            AppError::InvalidMovieId(_) => "Invalid Movie ID",
            AppError::InvalidSearch(_) => "Invalid Search Parameters",
            AppError::SearchFailed(_) => "Search Error",
        }
    }

    /// Text safe to show the user
    pub fn public_message(&self) -> String {
        match self {
            AppError::SearchFailed(_) => SEARCH_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::SearchFailed(detail) => {
                tracing::error!("Error occurred during movie search: {}", detail);
            }
            other => tracing::warn!("{}", other),
        }

        let page = views::error_page(self.title(), &self.public_message());
        (self.status(), Html(page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_id() {
        let err = AppError::MovieNotFound("999".to_string());

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Movie with ID 999 was not found.");
    }

    #[test]
    fn test_search_failure_hides_detail() {
        let err = AppError::SearchFailed("index out of bounds: secret".to_string());

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.public_message().contains("secret"));
        assert_eq!(err.title(), "Search Error");
    }
}
