//! Search command handler
//!
//! Runs one cafe search through the session and prints the resulting
//! card queue. With no query, searches near the device position.

use crate::config::Config;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::geo::device::IpLocator;
use crate::geo::resolver::LocationResolver;
use crate::places::PlacesClient;
use crate::session::{Session, Status};
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Location to search near (omit to use the device position)
    pub query: Option<String>,

    /// Search near the device position explicitly
    #[arg(long, conflicts_with = "query")]
    pub here: bool,

    /// Override the boundary base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    let config = Config::load()?;
    let base_url = args.base_url.unwrap_or(config.boundary.base_url);

    let client = PlacesClient::new(&base_url)?;
    let mut session = Session::new(client, LocationResolver::new(), FavoritesStore::load()?);

    // clap rejects `--here` combined with a query; no query means here.
    match (&args.query, args.here) {
        (Some(query), false) => session.search_text(query).await?,
        _ => session.search_here(&IpLocator::new()).await?,
    }

    if let Status::Empty(message) = session.status() {
        println!("{}", message);
        return Ok(());
    }

    if let Some(label) = session.location_label() {
        println!("Cafes near {}:", label);
        println!();
    }

    for (i, card) in session.cards().enumerate() {
        let rating = card
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "N/A".to_string());
        println!("{:2}. {} ({})", i + 1, card.display_name, rating);
        if !card.short_address.is_empty() {
            println!("    {}", card.short_address);
        }
    }

    Ok(())
}
