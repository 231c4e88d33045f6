//! Web front-end for the movie catalog.
//!
//! Routes:
//! - `GET /` redirects to `/movies`
//! - `GET /movies` lists the catalog
//! - `GET /movies/{id}/details` shows one movie and its reviews
//! - `GET /movies/search?name=&id=&genre=` filters the catalog
//! - `GET /health` liveness check

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod views;

pub use config::ServerConfig;
pub use error::AppError;
pub use state::AppState;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/movies", get(handlers::list_movies))
        .route("/movies/search", get(handlers::search_movies))
        .route("/movies/{id}/details", get(handlers::movie_details))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load data, bind, and serve until Ctrl-C
pub async fn run(config: ServerConfig) -> Result<()> {
    let state = AppState::from_config(&config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Listening on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
