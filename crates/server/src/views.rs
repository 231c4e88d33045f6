//! HTML views.
//!
//! Pages are rendered with plain string building. Every value that can come
//! from the dataset or the request goes through `html_escape` first.

use catalog::Movie;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use query::Review;
use std::fmt::Write;

/// What a search echoes back alongside its results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEcho {
    /// Name as received, empty when absent
    pub name: String,
    /// Id as decimal text, empty when absent
    pub id: String,
    /// Genre as received, empty when absent
    pub genre: String,
    pub result_count: usize,
    pub summary: String,
}

/// The catalog list, optionally as the result of a search
pub fn movies_page<'a>(
    movies: impl IntoIterator<Item = &'a Movie>,
    search: Option<&SearchEcho>,
) -> String {
    let mut body = String::new();
    body.push_str("<h1>Movies</h1>\n");
    body.push_str(&search_form(search));

    if let Some(search) = search {
        let _ = writeln!(
            body,
            "<p class=\"search-summary\">{} ({} found)</p>",
            text(&search.summary),
            search.result_count
        );
    }

    let mut rows = String::new();
    for movie in movies {
        let _ = writeln!(
            rows,
            "<li class=\"movie\"><a href=\"/movies/{id}/details\">{name}</a> ({year}) &middot; {genre} &middot; {rating:.1}</li>",
            id = movie.id,
            name = text(&movie.movie_name),
            year = movie.year,
            genre = text(&movie.genre),
            rating = movie.imdb_rating,
        );
    }

    if rows.is_empty() {
        body.push_str("<p class=\"empty\">No movies found.</p>\n");
    } else {
        let _ = write!(body, "<ul class=\"movies\">\n{}</ul>\n", rows);
    }

    layout("Movies", &body)
}

/// One movie with its reviews
pub fn details_page(movie: &Movie, reviews: &[Review]) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<h1>{name}</h1>\n\
         <dl class=\"movie-details\">\n\
         <dt>Director</dt><dd>{director}</dd>\n\
         <dt>Year</dt><dd>{year}</dd>\n\
         <dt>Genre</dt><dd>{genre}</dd>\n\
         <dt>Duration</dt><dd>{duration} min</dd>\n\
         <dt>IMDb rating</dt><dd>{rating:.1}</dd>\n\
         </dl>\n\
         <p class=\"description\">{description}</p>\n",
        name = text(&movie.movie_name),
        director = text(&movie.director),
        year = movie.year,
        genre = text(&movie.genre),
        duration = movie.duration_minutes,
        rating = movie.imdb_rating,
        description = text(&movie.description),
    );

    body.push_str("<h2>Reviews</h2>\n");
    if reviews.is_empty() {
        body.push_str("<p class=\"empty\">No reviews yet.</p>\n");
    } else {
        body.push_str("<ul class=\"reviews\">\n");
        for review in reviews {
            let _ = writeln!(
                body,
                "<li class=\"review\"><strong>{user}</strong> {stars}/5: {comment}</li>",
                user = text(&review.user_name),
                stars = review.rating,
                comment = text(&review.comment),
            );
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/movies\">Back to all movies</a></p>\n");

    layout(&movie.movie_name, &body)
}

/// Error view with a title and a user-facing message
pub fn error_page(title: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p class=\"error-message\">{}</p>\n<p><a href=\"/movies\">Back to all movies</a></p>\n",
        text(title),
        text(message)
    );
    layout(title, &body)
}

fn search_form(search: Option<&SearchEcho>) -> String {
    let (name, id, genre) = search
        .map(|s| (s.name.as_str(), s.id.as_str(), s.genre.as_str()))
        .unwrap_or_default();

    format!(
        "<form class=\"search\" method=\"get\" action=\"/movies/search\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Name\" value=\"{}\">\n\
         <input type=\"number\" name=\"id\" placeholder=\"ID\" min=\"1\" value=\"{}\">\n\
         <input type=\"text\" name=\"genre\" placeholder=\"Genre\" value=\"{}\">\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n",
        attr(name),
        attr(id),
        attr(genre)
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        text(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: 5,
            movie_name: "Tom & Jerry <Live>".to_string(),
            director: "Someone".to_string(),
            year: 2021,
            genre: "Comedy".to_string(),
            description: "Cat chases mouse.".to_string(),
            duration_minutes: 101,
            imdb_rating: 5.25,
        }
    }

    #[test]
    fn test_movie_text_is_escaped() {
        let html = movies_page([&movie()], None);

        assert!(html.contains("Tom &amp; Jerry &lt;Live&gt;"));
        assert!(!html.contains("<Live>"));
        assert!(html.contains("href=\"/movies/5/details\""));
    }

    #[test]
    fn test_search_echo_rendered_into_form() {
        let echo = SearchEcho {
            name: "\"quoted\"".to_string(),
            id: String::new(),
            genre: "drama".to_string(),
            result_count: 0,
            summary: "Search results in genre 'drama'".to_string(),
        };

        let html = movies_page(std::iter::empty(), Some(&echo));
        assert!(html.contains("value=\"&quot;quoted&quot;\""));
        assert!(html.contains("value=\"drama\""));
        assert!(html.contains("(0 found)"));
        assert!(html.contains("No movies found."));
    }

    #[test]
    fn test_details_without_reviews() {
        let html = details_page(&movie(), &[]);

        assert!(html.contains("101 min"));
        assert!(html.contains("No reviews yet."));
    }

    #[test]
    fn test_error_page() {
        let html = error_page("Movie Not Found", "Movie with ID 999 was not found.");

        assert!(html.contains("<h1>Movie Not Found</h1>"));
        assert!(html.contains("Movie with ID 999 was not found."));
    }
}
