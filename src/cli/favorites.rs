//! Favorites command handler
//!
//! Lists saved cafes in the order they were first saved.

use crate::error::Result;
use crate::favorites::FavoritesStore;
use clap::Args;

/// Favorites command arguments
#[derive(Args)]
pub struct FavoritesArgs {
    /// Show the favorites file path
    #[arg(long)]
    pub path: bool,
}

/// Run the favorites command
pub fn run(args: FavoritesArgs) -> Result<()> {
    if args.path {
        let path = FavoritesStore::store_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    let store = FavoritesStore::load()?;

    if store.is_empty() {
        println!("No favorites saved yet.");
        return Ok(());
    }

    for (i, entry) in store.entries().iter().enumerate() {
        let rating = entry
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "N/A".to_string());
        println!("{:2}. {} ({})", i + 1, entry.display_name, rating);
        if !entry.short_address.is_empty() {
            println!("    {}", entry.short_address);
        }
        println!("    saved {}", entry.saved_at.format("%Y-%m-%d %H:%M UTC"));
    }

    Ok(())
}
