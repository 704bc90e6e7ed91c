//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/heatspot/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hotspot detector parameters
    #[serde(default)]
    pub detector: DetectorConfig,

    /// Report simulation settings
    #[serde(default)]
    pub simulate: SimulateConfig,

    /// Default values for output
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Map URL generation settings
    #[serde(default)]
    pub url: UrlConfig,
}

/// Hotspot detector parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Neighborhood radius in degrees
    #[serde(default = "default_eps")]
    pub eps: f64,

    /// Minimum neighborhood size for a core point
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,

    /// Minimum eligible report temperature
    #[serde(default = "default_temp_threshold")]
    pub temp_threshold: f64,
}

/// Report simulation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateConfig {
    /// Default city to scatter reports around
    #[serde(default = "default_city")]
    pub city: String,

    /// Number of points per simulation
    #[serde(default = "default_points")]
    pub points: usize,

    /// Scatter radius in degrees
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Base temperature for simulated reports
    #[serde(default = "default_base_temp")]
    pub base_temp: f64,
}

/// Default values for output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Map URL generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Default URL provider
    #[serde(default = "default_url_provider")]
    pub default: String,

    /// URL provider templates
    #[serde(default = "default_url_providers")]
    pub providers: HashMap<String, String>,
}

// Default value functions for serde
fn default_eps() -> f64 {
    DEFAULT_EPS
}
fn default_min_samples() -> usize {
    DEFAULT_MIN_SAMPLES
}
fn default_temp_threshold() -> f64 {
    DEFAULT_TEMP_THRESHOLD
}
fn default_city() -> String {
    crate::geo::cities::DEFAULT_CITY.to_string()
}
fn default_points() -> usize {
    DEFAULT_POINTS
}
fn default_radius() -> f64 {
    DEFAULT_RADIUS
}
fn default_base_temp() -> f64 {
    DEFAULT_BASE_TEMP
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_url_provider() -> String {
    DEFAULT_URL_PROVIDER.to_string()
}
fn default_url_providers() -> HashMap<String, String> {
    let mut providers = HashMap::new();
    providers.insert(
        "google".to_string(),
        "https://www.google.com/maps/@{lat},{lng},15z".to_string(),
    );
    providers.insert(
        "openstreetmap".to_string(),
        "https://www.openstreetmap.org/#map=15/{lat}/{lng}".to_string(),
    );
    providers
}

// Implement Default traits
impl Default for Config {
    fn default() -> Self {
        Self {
            detector: DetectorConfig::default(),
            simulate: SimulateConfig::default(),
            defaults: DefaultsConfig::default(),
            server: ServerConfig::default(),
            url: UrlConfig::default(),
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            eps: default_eps(),
            min_samples: default_min_samples(),
            temp_threshold: default_temp_threshold(),
        }
    }
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            city: default_city(),
            points: default_points(),
            radius: default_radius(),
            base_temp: default_base_temp(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default: default_url_provider(),
            providers: default_url_providers(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            // Create default config
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Detector parameters from this config
    pub fn detector_params(&self) -> crate::hotspot::DetectorParams {
        crate::hotspot::DetectorParams {
            eps: self.detector.eps,
            min_samples: self.detector.min_samples,
            temp_threshold: self.detector.temp_threshold,
        }
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["detector", "eps"] => Some(self.detector.eps.to_string()),
            ["detector", "min_samples"] => Some(self.detector.min_samples.to_string()),
            ["detector", "temp_threshold"] => Some(self.detector.temp_threshold.to_string()),

            ["simulate", "city"] => Some(self.simulate.city.clone()),
            ["simulate", "points"] => Some(self.simulate.points.to_string()),
            ["simulate", "radius"] => Some(self.simulate.radius.to_string()),
            ["simulate", "base_temp"] => Some(self.simulate.base_temp.to_string()),

            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["url", "default"] => Some(self.url.default.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["detector", "eps"] => {
                self.detector.eps = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid eps value: {}", value)))?;
            }
            ["detector", "min_samples"] => {
                self.detector.min_samples = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid min_samples value: {}", value)))?;
            }
            ["detector", "temp_threshold"] => {
                self.detector.temp_threshold = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid temp_threshold value: {}", value))
                })?;
            }

            ["simulate", "city"] => {
                self.simulate.city = value.to_string();
            }
            ["simulate", "points"] => {
                self.simulate.points = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid points value: {}", value)))?;
            }
            ["simulate", "radius"] => {
                self.simulate.radius = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid radius value: {}", value)))?;
            }
            ["simulate", "base_temp"] => {
                self.simulate.base_temp = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid base_temp value: {}", value)))?;
            }

            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }

            ["url", "default"] => {
                self.url.default = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "detector.eps",
            "detector.min_samples",
            "detector.temp_threshold",
            "simulate.city",
            "simulate.points",
            "simulate.radius",
            "simulate.base_temp",
            "defaults.format",
            "server.host",
            "server.port",
            "url.default",
        ]
    }

    /// Format a map URL using the specified provider
    ///
    /// Replaces {lat} and {lng} placeholders with actual values
    pub fn format_url(&self, provider: Option<&str>, lat: f64, lng: f64) -> Result<String> {
        let provider_name = provider.unwrap_or(&self.url.default);

        let template = self
            .url
            .providers
            .get(provider_name)
            .ok_or_else(|| Error::Config(format!("Unknown URL provider: {}", provider_name)))?;

        Ok(template
            .replace("{lat}", &lat.to_string())
            .replace("{lng}", &lng.to_string()))
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn with_temp_config<F: FnOnce()>(f: F) {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        f();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.detector.eps, 0.01);
        assert_eq!(config.detector.min_samples, 3);
        assert_eq!(config.detector.temp_threshold, 30.0);
        assert_eq!(config.simulate.city, "New York");
        assert_eq!(config.simulate.points, 20);
        assert_eq!(config.simulate.radius, 0.1);
        assert_eq!(config.server.port, 8787);
    }

    #[test]
    fn test_detector_params() {
        let config = Config::default();
        let params = config.detector_params();
        assert_eq!(params.eps, config.detector.eps);
        assert_eq!(params.min_samples, config.detector.min_samples);
        assert_eq!(params.temp_threshold, config.detector.temp_threshold);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("detector.eps"), Some("0.01".to_string()));

        config.set("detector.eps", "0.02").unwrap();
        assert_eq!(config.detector.eps, 0.02);

        config.set("simulate.city", "Mumbai").unwrap();
        assert_eq!(config.get("simulate.city"), Some("Mumbai".to_string()));

        config.set("detector.min_samples", "5").unwrap();
        assert_eq!(config.detector.min_samples, 5);
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("detector.eps", "not_a_number").is_err());
        assert!(config.set("server.port", "70000").is_err());
    }

    #[test]
    fn test_format_url() {
        let config = Config::default();

        let url = config.format_url(Some("google"), 40.7128, -74.0060).unwrap();
        assert_eq!(url, "https://www.google.com/maps/@40.7128,-74.006,15z");

        let url = config
            .format_url(Some("openstreetmap"), 40.7128, -74.0060)
            .unwrap();
        assert_eq!(url, "https://www.openstreetmap.org/#map=15/40.7128/-74.006");
    }

    #[test]
    fn test_format_url_default_provider() {
        let config = Config::default();
        let url = config.format_url(None, 40.7128, -74.0060).unwrap();
        assert!(url.contains("openstreetmap.org"));
    }

    #[test]
    fn test_format_url_unknown_provider() {
        let config = Config::default();
        assert!(config.format_url(Some("unknown"), 40.7128, -74.0060).is_err());
    }

    #[test]
    fn test_save_and_load() {
        with_temp_config(|| {
            let mut config = Config::default();
            config.simulate.city = "Pune".to_string();
            config.detector.temp_threshold = 28.0;
            config.save().unwrap();

            let loaded = Config::load().unwrap();
            assert_eq!(loaded.simulate.city, "Pune");
            assert_eq!(loaded.detector.temp_threshold, 28.0);
        });
    }

    #[test]
    fn test_config_roundtrip() {
        // Test that a default config can be serialized and deserialized
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.detector.eps, 0.01);
        assert_eq!(loaded.simulate.points, 20);
        assert_eq!(loaded.server.port, 8787);
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        // Check that key sections exist
        assert!(toml.contains("[detector]"));
        assert!(toml.contains("[simulate]"));
        assert!(toml.contains("[server]"));
        assert!(toml.contains("[url.providers]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:8787");
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        assert!(keys.contains(&"detector.eps"));
        assert!(keys.contains(&"simulate.city"));
        assert!(keys.contains(&"server.port"));
    }
}
