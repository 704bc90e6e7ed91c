//! heatspot CLI entry point
//!
//! Urban heat island hotspot detector - CLI + web app

use heatspot::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
