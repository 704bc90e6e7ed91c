//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod cities;
pub mod config;
pub mod detect;
pub mod serve;
pub mod simulate;

use clap::{Parser, Subcommand};

/// Urban heat island hotspot detector
#[derive(Parser)]
#[command(name = "heatspot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect hotspots in a set of temperature reports
    Detect(detect::DetectArgs),

    /// Generate simulated reports around a city
    Simulate(simulate::SimulateArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// List known city centers
    Cities(cities::CitiesArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect(args) => detect::run(args),
        Commands::Simulate(args) => simulate::run(args),
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Cities(args) => cities::run(args),
    }
}
