//! Human-readable text output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::hotspot::DetectionResponse;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, response: &DetectionResponse, _config: &Config) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&format!("heatspot detection ({})\n", response.id));
        output.push_str(&format!(
            "Parameters: eps={} min_samples={} temp_threshold={}\n",
            response.request.eps, response.request.min_samples, response.request.temp_threshold
        ));
        output.push_str(&format!(
            "Reports: {} supplied, {} eligible\n\n",
            response.request.report_count, response.metadata.eligible_reports
        ));

        // Results
        if response.hotspots.is_empty() {
            output.push_str("No hotspots detected.\n");
        } else {
            output.push_str("Hotspots:\n");
            for (i, h) in response.hotspots.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. ({:.6}, {:.6}) {:.1}\u{00b0} {}\n",
                    i + 1,
                    h.latitude,
                    h.longitude,
                    h.temperature,
                    h.severity
                ));
            }
        }

        Ok(output)
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
    fn test_text_format() {
        let formatter = TextFormatter;
        let response = sample_response();
        let config = Config::default();

        let output = formatter.format(&response, &config).unwrap();

        assert!(output.contains("heatspot detection"));
        assert!(output.contains("Parameters:"));
        assert!(output.contains("Hotspots:"));
        assert!(output.contains("High"));
    }

    #[test]
    fn test_text_format_no_hotspots() {
        let formatter = TextFormatter;
        let response = analyze(&[], &DetectorParams::default());
        let config = Config::default();

        let output = formatter.format(&response, &config).unwrap();
        assert!(output.contains("No hotspots detected"));
    }

    #[test]
    fn test_text_formatter_info() {
        let formatter = TextFormatter;
        assert_eq!(formatter.name(), "text");
        assert!(!formatter.description().is_empty());
    }
}
