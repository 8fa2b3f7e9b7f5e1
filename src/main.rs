//! cafe-swipe CLI entry point
//!
//! Swipe-based nearby cafe discovery - CLI + boundary proxy

use cafe_swipe::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
