//! Simulate command handler
//!
//! Generates synthetic temperature reports (or bare coordinates) around
//! a city center, for demos and for feeding the detect command.

use crate::config::Config;
use crate::rng::get_backend;
use crate::sample::{generate_coordinates_around_city, simulate_reports};
use clap::Args;

/// Simulate command arguments
#[derive(Args)]
pub struct SimulateArgs {
    /// City to scatter reports around
    #[arg(long, short = 'c')]
    pub city: Option<String>,

    /// Number of reports to generate
    #[arg(long, short = 'p')]
    pub points: Option<usize>,

    /// Scatter radius in degrees
    #[arg(long, short = 'r')]
    pub radius: Option<f64>,

    /// Base temperature for the batch
    #[arg(long, short = 'b')]
    pub base_temp: Option<f64>,

    /// RNG seed for reproducible output
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Emit bare coordinate pairs instead of full reports
    #[arg(long)]
    pub coords_only: bool,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Run the simulate command
pub fn run(args: SimulateArgs) -> crate::error::Result<()> {
    let config = Config::load()?;

    let city = args.city.unwrap_or_else(|| config.simulate.city.clone());
    let points = args.points.unwrap_or(config.simulate.points);
    let radius = args.radius.unwrap_or(config.simulate.radius);
    let base_temp = args.base_temp.unwrap_or(config.simulate.base_temp);

    if radius <= 0.0 || !radius.is_finite() {
        return Err(crate::error::Error::InvalidParameter(format!(
            "radius must be a positive finite number, got {}",
            radius
        )));
    }

    let rng = get_backend(args.seed);

    let output = if args.coords_only {
        let coords = generate_coordinates_around_city(&city, points, radius, rng.as_ref());
        serde_json::to_string_pretty(&coords)?
    } else {
        let simulation = simulate_reports(&city, points, radius, base_temp, rng.as_ref());
        eprintln!(
            "Simulated {} reports around {} ({}, {})",
            simulation.reports.len(),
            simulation.city,
            simulation.center.lat,
            simulation.center.lng
        );
        // The reports alone pipe straight into `heatspot detect`
        serde_json::to_string_pretty(&simulation.reports)?
    };

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
