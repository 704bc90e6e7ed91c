//! Hotspot detection
//!
//! This module handles:
//! - The temperature report and hotspot data model
//! - Density-based clustering of report locations
//! - Severity labeling of detected clusters

pub mod dbscan;
pub mod detect;

pub use detect::{analyze, identify_hotspots, DetectionResponse};

use serde::{Deserialize, Serialize};

/// Mean temperature at or above which a cluster is labeled Extreme
pub const SEVERITY_EXTREME_MIN: f64 = 35.0;

/// Mean temperature at or above which a cluster is labeled High
pub const SEVERITY_HIGH_MIN: f64 = 32.0;

/// One community temperature sample
///
/// Reports are supplied by an ingestion layer and treated as immutable
/// input; the core assumes nothing about uniqueness of location or time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReport {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Temperature in the unit used across the system (Celsius)
    pub temperature: f64,
}

impl TemperatureReport {
    /// Create a new report
    pub fn new(latitude: f64, longitude: f64, temperature: f64) -> Self {
        Self {
            latitude,
            longitude,
            temperature,
        }
    }
}

/// Severity label for a detected hotspot
///
/// Derived from a cluster's mean temperature, rounded to 1 decimal:
/// `>= 35` Extreme, `>= 32` High, otherwise Moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Moderate,
    High,
    Extreme,
}

impl Severity {
    /// Classify a cluster mean temperature
    pub fn from_mean_temperature(temp: f64) -> Self {
        if temp >= SEVERITY_EXTREME_MIN {
            Self::Extreme
        } else if temp >= SEVERITY_HIGH_MIN {
            Self::High
        } else {
            Self::Moderate
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
            Self::Extreme => write!(f, "Extreme"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            "extreme" => Ok(Self::Extreme),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// A detected heat island hotspot
///
/// One per surviving cluster: the centroid of its member reports, their
/// mean temperature (rounded to 1 decimal), and a severity label.
/// Hotspots are recomputed fresh on every detection run and never
/// persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Mean latitude of member reports
    pub latitude: f64,
    /// Mean longitude of member reports
    pub longitude: f64,
    /// Mean temperature of member reports, rounded to 1 decimal
    pub temperature: f64,
    /// Severity label derived from the rounded mean temperature
    pub severity: Severity,
}

/// Detection parameters
///
/// Domain-tuned defaults: `eps` of 0.01 degrees is roughly 1 km at
/// mid-latitudes under the planar approximation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorParams {
    /// Maximum neighborhood radius in degrees
    pub eps: f64,
    /// Minimum neighborhood size (including the point itself) to seed a cluster
    pub min_samples: usize,
    /// Minimum temperature for a report to be eligible
    pub temp_threshold: f64,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            eps: crate::config::defaults::DEFAULT_EPS,
            min_samples: crate::config::defaults::DEFAULT_MIN_SAMPLES,
            temp_threshold: crate::config::defaults::DEFAULT_TEMP_THRESHOLD,
        }
    }
}

impl DetectorParams {
    /// Validate parameter ranges
    ///
    /// The detector itself accepts any values; this is the boundary check
    /// used by the CLI and HTTP API.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.eps <= 0.0 || !self.eps.is_finite() {
            return Err(crate::error::Error::InvalidParameter(format!(
                "eps must be a positive finite number, got {}",
                self.eps
            )));
        }
        if self.min_samples == 0 {
            return Err(crate::error::Error::InvalidParameter(
                "min_samples must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_severity_bands() {
        assert_eq!(Severity::from_mean_temperature(35.0), Severity::Extreme);
        assert_eq!(Severity::from_mean_temperature(40.0), Severity::Extreme);
        assert_eq!(Severity::from_mean_temperature(34.9), Severity::High);
        assert_eq!(Severity::from_mean_temperature(32.0), Severity::High);
        assert_eq!(Severity::from_mean_temperature(31.9), Severity::Moderate);
        assert_eq!(Severity::from_mean_temperature(30.0), Severity::Moderate);
    }

    #[test]
    fn test_severity_display_and_parse() {
        for severity in [Severity::Moderate, Severity::High, Severity::Extreme] {
            let parsed = Severity::from_str(&severity.to_string()).unwrap();
            assert_eq!(parsed, severity);
        }
        assert!(Severity::from_str("scorching").is_err());
    }

    #[test]
    fn test_severity_serializes_as_label() {
        let json = serde_json::to_string(&Severity::Extreme).unwrap();
        assert_eq!(json, "\"Extreme\"");
    }

    #[test]
    fn test_default_params() {
        let params = DetectorParams::default();
        assert_eq!(params.eps, 0.01);
        assert_eq!(params.min_samples, 3);
        assert_eq!(params.temp_threshold, 30.0);
    }

    #[test]
    fn test_params_validate() {
        assert!(DetectorParams::default().validate().is_ok());

        let bad_eps = DetectorParams {
            eps: 0.0,
            ..DetectorParams::default()
        };
        assert!(bad_eps.validate().is_err());

        let bad_min = DetectorParams {
            min_samples: 0,
            ..DetectorParams::default()
        };
        assert!(bad_min.validate().is_err());
    }

    #[test]
    fn test_report_serialization() {
        let report = TemperatureReport::new(19.076, 72.8777, 36.5);
        let json = serde_json::to_string(&report).unwrap();
        let parsed: TemperatureReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
