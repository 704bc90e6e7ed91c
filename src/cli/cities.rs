//! Cities command handler
//!
//! Lists the known city reference points, grouped by region.

use crate::error::Result;
use crate::geo::cities::{available_cities, DEFAULT_CITY};
use clap::Args;

/// Cities command arguments
#[derive(Args)]
pub struct CitiesArgs {
    /// Only list cities in this region (e.g., "US" or "India")
    #[arg(long, short = 'r')]
    pub region: Option<String>,
}

/// Run the cities command
pub fn run(args: CitiesArgs) -> Result<()> {
    let cities = available_cities();

    let mut regions: Vec<&str> = Vec::new();
    for city in &cities {
        if !regions.contains(&city.region.as_str()) {
            regions.push(city.region.as_str());
        }
    }

    for region in regions {
        if let Some(filter) = &args.region {
            if !filter.eq_ignore_ascii_case(region) {
                continue;
            }
        }

        println!("{}:", region);
        for city in cities.iter().filter(|c| c.region == region) {
            let marker = if city.name == DEFAULT_CITY { " (default)" } else { "" };
            println!(
                "  {:14} ({:.4}, {:.4}){}",
                city.name, city.center.lat, city.center.lng, marker
            );
        }
        println!();
    }

    Ok(())
}
