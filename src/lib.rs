//! heatspot: Urban Heat Island Hotspot Detector
//!
//! A library and CLI tool for finding heat island hotspots in
//! community-submitted temperature reports, plus a synthetic report
//! generator for demos and tests.
//!
//! ## Features
//!
//! - Density-based (DBSCAN) hotspot detection with severity labels
//! - Synthetic coordinate/report generation around known city centers
//! - Pluggable RNG backends (thread-local or seeded)
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use heatspot::hotspot::{identify_hotspots, DetectorParams, TemperatureReport};
//!
//! let reports = vec![
//!     TemperatureReport::new(40.000, -74.000, 36.0),
//!     TemperatureReport::new(40.002, -74.001, 34.0),
//!     TemperatureReport::new(40.001, -74.002, 33.0),
//! ];
//!
//! let hotspots = identify_hotspots(&reports, &DetectorParams::default());
//! for h in &hotspots {
//!     println!("({:.4}, {:.4}) {} {}", h.latitude, h.longitude, h.temperature, h.severity);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod geo;
pub mod hotspot;
pub mod rng;
pub mod sample;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::Coordinates;
pub use hotspot::{DetectorParams, Hotspot, Severity, TemperatureReport};
