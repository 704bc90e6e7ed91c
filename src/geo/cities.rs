//! Known city reference points
//!
//! Static lookup table from city name to an approximate downtown center.
//! This is configuration data for the report simulator, not a geocoder:
//! unknown names fall back to the default city instead of failing.

use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};

/// City used when a name is not present in the table
pub const DEFAULT_CITY: &str = "New York";

/// A named city reference point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityCenter {
    /// City name (used as the lookup key)
    pub name: String,
    /// Region grouping ("US" or "India")
    pub region: String,
    /// Approximate downtown center
    pub center: Coordinates,
}

/// The fixed city table: 10 US cities and 10 Indian cities
const CITY_TABLE: [(&str, &str, f64, f64); 20] = [
    ("New York", "US", 40.7128, -74.0060),
    ("Los Angeles", "US", 34.0522, -118.2437),
    ("Chicago", "US", 41.8781, -87.6298),
    ("Houston", "US", 29.7604, -95.3698),
    ("Phoenix", "US", 33.4484, -112.0740),
    ("Philadelphia", "US", 39.9526, -75.1652),
    ("San Antonio", "US", 29.4241, -98.4936),
    ("San Diego", "US", 32.7157, -117.1611),
    ("Dallas", "US", 32.7767, -96.7970),
    ("San Jose", "US", 37.3382, -121.8863),
    ("Mumbai", "India", 19.0760, 72.8777),
    ("Delhi", "India", 28.6139, 77.2090),
    ("Bangalore", "India", 12.9716, 77.5946),
    ("Hyderabad", "India", 17.3850, 78.4867),
    ("Chennai", "India", 13.0827, 80.2707),
    ("Kolkata", "India", 22.5726, 88.3639),
    ("Pune", "India", 18.5204, 73.8567),
    ("Ahmedabad", "India", 23.0225, 72.5714),
    ("Jaipur", "India", 26.9124, 75.7873),
    ("Lucknow", "India", 26.8467, 80.9462),
];

/// Look up a city center by exact name
pub fn city_center(name: &str) -> Option<Coordinates> {
    CITY_TABLE
        .iter()
        .find(|(city, _, _, _)| *city == name)
        .map(|(_, _, lat, lng)| Coordinates::new(*lat, *lng))
}

/// Resolve a city name to a reference point
///
/// Unknown names degrade silently to the default city; the returned
/// name is the one actually used.
pub fn resolve_city(name: &str) -> (&'static str, Coordinates) {
    // The default city sits at index 0 of the table
    let (city, _, lat, lng) = CITY_TABLE
        .iter()
        .find(|(city, _, _, _)| *city == name)
        .unwrap_or(&CITY_TABLE[0]);
    (city, Coordinates::new(*lat, *lng))
}

/// List all known city centers
pub fn available_cities() -> Vec<CityCenter> {
    CITY_TABLE
        .iter()
        .map(|(name, region, lat, lng)| CityCenter {
            name: name.to_string(),
            region: region.to_string(),
            center: Coordinates::new(*lat, *lng),
        })
        .collect()
}
