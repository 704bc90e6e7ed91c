//! Server shared state
//!
//! Holds configuration for the HTTP server. Detection itself is
//! stateless; reports arrive in the request body and nothing is stored
//! between calls.

use crate::config::Config;
use crate::hotspot::DetectorParams;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Detector parameters from the current configuration
    pub async fn detector_params(&self) -> DetectorParams {
        self.config.read().await.detector_params()
    }
}
