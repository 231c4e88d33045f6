//! Command-line configuration for the web server.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Movie catalog web server
#[derive(Parser, Debug, Clone)]
#[command(name = "movie-server")]
#[command(about = "Browse and search the movie catalog over HTTP", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Movie dataset to load instead of the bundled one
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// JSON file of reviews to serve on the details page
    #[arg(long)]
    pub reviews_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info,server=debug,query=debug,tower_http=debug")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        // Same values as the clap defaults above
        Self::parse_from(["movie-server"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();

        assert_eq!(config.bind, "127.0.0.1:8080".parse().unwrap());
        assert!(config.data_file.is_none());
        assert!(config.reviews_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::parse_from([
            "movie-server",
            "--bind",
            "0.0.0.0:3000",
            "--data-file",
            "movies.json",
        ]);

        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.data_file, Some(PathBuf::from("movies.json")));
    }
}
