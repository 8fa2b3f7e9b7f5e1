//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod favorites;
pub mod search;
pub mod serve;

use clap::{Parser, Subcommand};

/// Swipe-based nearby cafe discovery
#[derive(Parser)]
#[command(name = "cafe-swipe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the boundary proxy server (foreground)
    Serve(serve::ServeArgs),

    /// Search for nearby cafes
    Search(search::SearchArgs),

    /// List saved favorites
    Favorites(favorites::FavoritesArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Search(args) => search::run(args).await,
        Commands::Favorites(args) => favorites::run(args),
        Commands::Config(args) => config::run(args),
    }
}
