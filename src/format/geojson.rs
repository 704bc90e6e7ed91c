//! GeoJSON output formatter
//!
//! Emits hotspots as a FeatureCollection of Point features, ready to be
//! dropped onto a web map layer.

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::hotspot::DetectionResponse;
use serde_json::json;

/// GeoJSON formatter - outputs a FeatureCollection of hotspot points
pub struct GeoJsonFormatter;

impl OutputFormatter for GeoJsonFormatter {
    fn name(&self) -> &str {
        "geojson"
    }

    fn description(&self) -> &str {
        "GeoJSON FeatureCollection of hotspots"
    }

    fn format(&self, response: &DetectionResponse, _config: &Config) -> Result<String> {
        let features: Vec<serde_json::Value> = response
            .hotspots
            .iter()
            .map(|h| {
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        // GeoJSON positions are [longitude, latitude]
                        "coordinates": [h.longitude, h.latitude],
                    },
                    "properties": {
                        "temperature": h.temperature,
                        "severity": h.severity,
                    },
                })
            })
            .collect();

        let collection = json!({
            "type": "FeatureCollection",
            "features": features,
        });

        Ok(serde_json::to_string_pretty(&collection)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotspot::{analyze, DetectorParams, TemperatureReport};

    fn sample_response() -> DetectionResponse {
        let reports = vec![
            TemperatureReport::new(40.000, -74.000, 36.0),
            TemperatureReport::new(40.002, -74.001, 34.0),
            TemperatureReport::new(40.001, -74.002, 33.0),
        ];
        analyze(&reports, &DetectorParams::default())
    }

    #[test]
    fn test_geojson_format() {
        let formatter = GeoJsonFormatter;
        let response = sample_response();
        let config = Config::default();

        let output = formatter.format(&response, &config).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["type"], "FeatureCollection");
        let features = parsed["features"].as_array().unwrap();
        assert_eq!(features.len(), 1);

        let feature = &features[0];
        assert_eq!(feature["geometry"]["type"], "Point");
        // Longitude comes first in GeoJSON
        let coords = feature["geometry"]["coordinates"].as_array().unwrap();
        assert!(coords[0].as_f64().unwrap() < -70.0);
        assert!(coords[1].as_f64().unwrap() > 39.0);
        assert_eq!(feature["properties"]["severity"], "High");
    }

    #[test]
    fn test_geojson_empty_collection() {
        let formatter = GeoJsonFormatter;
        let response = analyze(&[], &DetectorParams::default());
        let config = Config::default();

        let output = formatter.format(&response, &config).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed["features"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_geojson_formatter_info() {
        let formatter = GeoJsonFormatter;
        assert_eq!(formatter.name(), "geojson");
        assert!(!formatter.description().is_empty());
    }
}
