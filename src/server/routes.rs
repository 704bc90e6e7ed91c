//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::error::Error;
use crate::format::{available_formats, FormatInfo};
use crate::geo::cities::{available_cities, CityCenter, DEFAULT_CITY};
use crate::geo::Coordinates;
use crate::hotspot::{analyze, DetectionResponse, DetectorParams, TemperatureReport};
use crate::rng::get_backend;
use crate::sample::{simulate_reports, Simulation};
use crate::server::state::AppState;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/hotspots", post(hotspots_handler))
        .route("/api/simulate", post(simulate_handler))
        .route("/api/cities", get(cities_handler))
        .route("/api/formats", get(formats_handler))
        .route("/api/status", get(status_handler))
        .nest_service(
            "/",
            ServeDir::new("static").append_index_html_on_directories(true),
        )
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::InvalidParameter(_) => "INVALID_PARAMETER",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Hotspot detection request body
#[derive(Debug, Deserialize)]
pub struct HotspotsRequest {
    /// Community temperature reports to analyze
    pub reports: Vec<TemperatureReport>,
    /// Neighborhood radius in degrees (config default when omitted)
    pub eps: Option<f64>,
    /// Minimum cluster seed size (config default when omitted)
    pub min_samples: Option<usize>,
    /// Minimum eligible temperature (config default when omitted)
    pub temp_threshold: Option<f64>,
}

/// Detect hotspots in submitted reports
///
/// POST /api/hotspots
async fn hotspots_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<HotspotsRequest>,
) -> Result<Json<DetectionResponse>, ApiError> {
    // Validate report coordinates at the boundary
    for report in &req.reports {
        Coordinates::new(report.latitude, report.longitude)
            .validate()
            .map_err(ApiError::from)?;
    }

    let defaults = state.detector_params().await;
    let params = DetectorParams {
        eps: req.eps.unwrap_or(defaults.eps),
        min_samples: req.min_samples.unwrap_or(defaults.min_samples),
        temp_threshold: req.temp_threshold.unwrap_or(defaults.temp_threshold),
    };
    params.validate().map_err(ApiError::from)?;

    Ok(Json(analyze(&req.reports, &params)))
}

/// Report simulation request body
#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    /// City to scatter reports around (config default when omitted)
    pub city: Option<String>,
    /// Number of reports to generate
    pub points: Option<usize>,
    /// Scatter radius in degrees
    pub radius: Option<f64>,
    /// Base temperature for the batch
    pub base_temp: Option<f64>,
    /// RNG seed for reproducible output
    pub seed: Option<u64>,
}

/// Generate simulated reports around a city
///
/// POST /api/simulate
async fn simulate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SimulateRequest>,
) -> Result<Json<Simulation>, ApiError> {
    let config = state.config.read().await;
    let city = req.city.unwrap_or_else(|| config.simulate.city.clone());
    let points = req.points.unwrap_or(config.simulate.points);
    let radius = req.radius.unwrap_or(config.simulate.radius);
    let base_temp = req.base_temp.unwrap_or(config.simulate.base_temp);
    drop(config);

    if radius <= 0.0 || !radius.is_finite() {
        return Err(ApiError {
            error: format!("radius must be a positive finite number, got {}", radius),
            code: "INVALID_PARAMETER".to_string(),
        });
    }

    let rng = get_backend(req.seed);
    let simulation = simulate_reports(&city, points, radius, base_temp, rng.as_ref());

    Ok(Json(simulation))
}

/// Cities list response
#[derive(Debug, Serialize, Deserialize)]
pub struct CitiesResponse {
    pub cities: Vec<CityCenter>,
    /// Fallback city for unknown names
    pub default: String,
}

/// List known city centers
///
/// GET /api/cities
async fn cities_handler() -> Json<CitiesResponse> {
    Json(CitiesResponse {
        cities: available_cities(),
        default: DEFAULT_CITY.to_string(),
    })
}

/// Formats list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatInfo>,
}

/// List available output formats
///
/// GET /api/formats
async fn formats_handler() -> Json<FormatsResponse> {
    Json(FormatsResponse {
        formats: available_formats(),
    })
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Detector parameters currently in effect
    pub detector: DetectorParams,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let detector = state.detector_params().await;

    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        detector,
    })
}
