//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default DBSCAN neighborhood radius in degrees (~1 km at mid-latitudes)
pub const DEFAULT_EPS: f64 = 0.01;

/// Default minimum neighborhood size for a core point
pub const DEFAULT_MIN_SAMPLES: usize = 3;

/// Default minimum temperature for a report to be eligible
pub const DEFAULT_TEMP_THRESHOLD: f64 = 30.0;

/// Default number of simulated points per run
pub const DEFAULT_POINTS: usize = 20;

/// Default simulation scatter radius in degrees
pub const DEFAULT_RADIUS: f64 = 0.1;

/// Default base temperature for simulated reports
pub const DEFAULT_BASE_TEMP: f64 = 32.0;

/// Default output format
pub const DEFAULT_FORMAT: &str = "json";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8787;

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "openstreetmap";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "heatspot";
