//! JSON output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::hotspot::DetectionResponse;

/// JSON formatter - outputs full response as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON response"
    }

    fn format(&self, response: &DetectionResponse, _config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
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
    fn test_json_format() {
        let formatter = JsonFormatter;
        let response = sample_response();
        let config = Config::default();

        let output = formatter.format(&response, &config).unwrap();

        // Verify it's valid JSON
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("id").is_some());
        assert!(parsed.get("request").is_some());
        assert!(parsed.get("hotspots").is_some());
    }

    #[test]
    fn test_json_formatter_info() {
        let formatter = JsonFormatter;
        assert_eq!(formatter.name(), "json");
        assert!(!formatter.description().is_empty());
    }
}
