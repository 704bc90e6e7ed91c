//! URL output formatter

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::OutputFormatter;
use crate::hotspot::DetectionResponse;

/// URL formatter - outputs a map URL for the hottest detected hotspot
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format URL with optional provider override
    pub fn format_with_provider(
        &self,
        response: &DetectionResponse,
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        // Hottest hotspot wins; on a tie max_by keeps the later cluster
        let hottest = response
            .hotspots
            .iter()
            .max_by(|a, b| {
                a.temperature
                    .partial_cmp(&b.temperature)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .ok_or_else(|| Error::Config("No hotspots to link".to_string()))?;

        config.format_url(provider, hottest.latitude, hottest.longitude)
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL for the hottest hotspot"
    }

    fn format(&self, response: &DetectionResponse, config: &Config) -> Result<String> {
        self.format_with_provider(response, config, None)
    }
}
