//! Synthetic coordinate and report generation
//!
//! Scatters random points around a known city center, for demos and for
//! exercising the hotspot detector. Points are uniformly distributed
//! over the disk: the radial draw uses the sqrt() correction so density
//! does not pile up at the center.
//!
//! All offsets are raw degree arithmetic to match the detector's planar
//! distance model; no meters conversion is applied.

use crate::geo::cities::resolve_city;
use crate::geo::Coordinates;
use crate::hotspot::TemperatureReport;
use crate::rng::RngBackend;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Lower bound of the random temperature offset applied to simulated reports
pub const TEMP_VARIATION_MIN: f64 = -2.0;

/// Upper bound of the random temperature offset applied to simulated reports
pub const TEMP_VARIATION_MAX: f64 = 3.0;

/// Generate random points uniformly distributed within `radius` degrees
/// of a center
///
/// # Algorithm
/// Standard uniform disk point picking:
/// - r = radius * sqrt(random())  -- sqrt corrects for area distribution
/// - theta = 2 * PI * random()
/// - lat offset = r * sin(theta), lng offset = r * cos(theta)
pub fn scatter_around(
    center: Coordinates,
    radius: f64,
    count: usize,
    rng: &dyn RngBackend,
) -> Vec<Coordinates> {
    // Get all random floats at once
    let floats = rng.floats(count * 2);
    let mut points = Vec::with_capacity(count);

    for i in 0..count {
        let u1 = floats[i * 2]; // For radius
        let u2 = floats[i * 2 + 1]; // For angle

        let r = radius * u1.sqrt();
        let theta = 2.0 * PI * u2;

        points.push(Coordinates::new(
            center.lat + r * theta.sin(),
            center.lng + r * theta.cos(),
        ));
    }

    points
}

/// Generate random coordinates around a named city
///
/// Unknown city names silently fall back to the default city; this
/// function always succeeds, by design, since it exists as a test/demo
/// fixture.
///
/// # Arguments
/// * `city` - City name (see [`crate::geo::cities`])
/// * `num_points` - Number of points to generate (0 yields an empty list)
/// * `radius` - Maximum radial offset in degrees
/// * `rng` - Random number backend
pub fn generate_coordinates_around_city(
    city: &str,
    num_points: usize,
    radius: f64,
    rng: &dyn RngBackend,
) -> Vec<Coordinates> {
    let (_, center) = resolve_city(city);
    scatter_around(center, radius, num_points, rng)
}

/// A simulated batch of community reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    /// City the reports were scattered around (after fallback resolution)
    pub city: String,
    /// Reference center used
    pub center: Coordinates,
    /// The simulated reports
    pub reports: Vec<TemperatureReport>,
}

/// Simulate community temperature reports around a city
///
/// Each report takes the base temperature plus a uniform random offset
/// in [`TEMP_VARIATION_MIN`, `TEMP_VARIATION_MAX`), mirroring how the
/// dashboard seeds its heat map when few real reports exist.
pub fn simulate_reports(
    city: &str,
    num_points: usize,
    radius: f64,
    base_temp: f64,
    rng: &dyn RngBackend,
) -> Simulation {
    let (resolved, center) = resolve_city(city);
    let coords = scatter_around(center, radius, num_points, rng);
    let offsets = rng.floats(num_points);

    let reports = coords
        .into_iter()
        .zip(offsets)
        .map(|(c, u)| {
            let variation = TEMP_VARIATION_MIN + (TEMP_VARIATION_MAX - TEMP_VARIATION_MIN) * u;
            TemperatureReport::new(c.lat, c.lng, base_temp + variation)
        })
        .collect();

    Simulation {
        city: resolved.to_string(),
        center,
        reports,
    }
}
