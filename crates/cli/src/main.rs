use anyhow::{Result, anyhow, bail};
use catalog::{Catalog, Movie, MovieId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use query::{MovieQuery, MovieService, SearchCriteria};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Movie Catalog - browse and search the bundled movie list
#[derive(Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Browse and search the movie catalog from the terminal", long_about = None)]
struct Cli {
    /// Movie dataset to load instead of the bundled one
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie in catalog order
    List,

    /// Show the details of one movie
    Show {
        /// Movie ID to display
        #[arg(long)]
        id: MovieId,
    },

    /// Search by name, id and genre (all optional, combined with AND)
    Search {
        /// Name substring (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Exact movie ID
        #[arg(long, allow_negative_numbers = true)]
        id: Option<MovieId>,

        /// Genre substring (case-insensitive)
        #[arg(long)]
        genre: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // A bad dataset is logged and leaves the catalog empty
    let catalog = Arc::new(Catalog::initialize_from(cli.data_file.as_deref()));
    debug!("Catalog loaded with {} movies", catalog.len());
    let service = MovieService::new(catalog);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List => handle_list(&service),
        Commands::Show { id } => handle_show(&service, id)?,
        Commands::Search { name, id, genre } => handle_search(&service, name, id, genre)?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(service: &impl MovieQuery) {
    let movies = service.all_movies();
    println!("{}", format!("{} movies:", movies.len()).bold().blue());
    print_movies(movies.iter());
}

/// Handle the 'show' command
fn handle_show(service: &impl MovieQuery, id: MovieId) -> Result<()> {
    let movie = service
        .movie_by_id(Some(id))
        .ok_or_else(|| anyhow!("Movie with ID {} was not found.", id))?;

    println!("{}", format!("{} ({})", movie.movie_name, movie.year).bold().blue());
    println!("{}Director: {}", "• ".green(), movie.director);
    println!("{}Genre: {}", "• ".green(), movie.genre);
    println!("{}Duration: {} min", "• ".green(), movie.duration_minutes);
    println!("{}IMDb rating: {:.1}", "• ".cyan(), movie.imdb_rating);
    println!();
    println!("{}", movie.description);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(
    service: &impl MovieQuery,
    name: Option<String>,
    id: Option<MovieId>,
    genre: Option<String>,
) -> Result<()> {
    // Same boundary rule as the web front-end
    if id.is_some_and(|id| id <= 0) {
        bail!("Movie ID must be a positive number.");
    }

    let criteria = SearchCriteria { name, id, genre };
    let results = service.search_movies(&criteria);

    println!(
        "{}",
        format!("{} ({} found):", criteria.summary(), results.len())
            .bold()
            .blue()
    );
    print_movies(results.into_iter());
    Ok(())
}

/// Helper function to format and print a list of movies
fn print_movies<'a>(movies: impl Iterator<Item = &'a Movie>) {
    for movie in movies {
        println!(
            "{}: {} ({}) [{}] - IMDb {:.1}",
            movie.id.to_string().green(),
            movie.movie_name,
            movie.year,
            movie.genre,
            movie.imdb_rating
        );
    }
}
