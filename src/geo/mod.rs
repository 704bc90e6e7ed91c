//! Geographic primitives
//!
//! This module handles:
//! - The `Coordinates` pair used throughout the crate
//! - The fixed table of known city reference points

pub mod cities;

use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
///
/// All distances in this crate are computed directly on degree values
/// (planar approximation), matching the detector's `eps` and the
/// generator's `radius` units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lng < -180.0 || self.lng > 180.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }

    /// Planar Euclidean distance in degrees to another coordinate
    pub fn degree_distance(&self, other: &Coordinates) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        (dlat * dlat + dlng * dlng).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_in_range() {
        assert!(Coordinates::new(40.7128, -74.0060).validate().is_ok());
        assert!(Coordinates::new(-90.0, 180.0).validate().is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        assert!(Coordinates::new(91.0, 0.0).validate().is_err());
        assert!(Coordinates::new(0.0, -181.0).validate().is_err());
    }

    #[test]
    fn test_degree_distance() {
        let a = Coordinates::new(40.0, -74.0);
        let b = Coordinates::new(40.0, -73.99);
        assert!((a.degree_distance(&b) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let c = Coordinates::new(19.076, 72.8777);
        let json = serde_json::to_string(&c).unwrap();
        let parsed: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.lat, 19.076);
        assert_eq!(parsed.lng, 72.8777);
    }
}
