//! Hotspot detection over community temperature reports
//!
//! Filters reports by temperature threshold, clusters the survivors with
//! DBSCAN, and aggregates each cluster into a severity-labeled hotspot.

use crate::geo::Coordinates;
use crate::hotspot::{dbscan, DetectorParams, Hotspot, Severity, TemperatureReport};
use serde::{Deserialize, Serialize};

/// Identify heat island hotspots from community temperature reports
///
/// Pure function over its inputs: the same reports and parameters always
/// produce the same hotspots, in cluster-label order (ascending, labels
/// assigned in input scan order).
///
/// # Arguments
/// * `reports` - Community temperature reports (may be empty)
/// * `params` - eps / min_samples / temp_threshold
///
/// # Returns
/// One hotspot per cluster that survives threshold filtering and
/// density clustering. Noise points never contribute to a hotspot.
pub fn identify_hotspots(reports: &[TemperatureReport], params: &DetectorParams) -> Vec<Hotspot> {
    if reports.is_empty() {
        return Vec::new();
    }

    // Filter for high temperatures only
    let eligible: Vec<&TemperatureReport> = reports
        .iter()
        .filter(|r| r.temperature >= params.temp_threshold)
        .collect();

    // Clustering over fewer than min_samples points is degenerate
    if eligible.len() < params.min_samples {
        return Vec::new();
    }

    let coords: Vec<Coordinates> = eligible
        .iter()
        .map(|r| Coordinates::new(r.latitude, r.longitude))
        .collect();

    let labels = dbscan::cluster(&coords, params.eps, params.min_samples);

    // Group by cluster label, accumulating sums; labels are dense and
    // ascending so a Vec indexed by label suffices
    let cluster_count = labels.iter().flatten().max().map_or(0, |max| max + 1);
    let mut sums = vec![ClusterSum::default(); cluster_count];

    for (report, label) in eligible.iter().zip(&labels) {
        if let Some(id) = label {
            let sum = &mut sums[*id];
            sum.lat += report.latitude;
            sum.lng += report.longitude;
            sum.temp += report.temperature;
            sum.count += 1;
        }
    }

    sums.into_iter()
        .map(|sum| {
            let n = sum.count as f64;
            // Severity is derived from the rounded mean so the reported
            // temperature and the label always agree
            let mean_temp = round1(sum.temp / n);
            Hotspot {
                latitude: sum.lat / n,
                longitude: sum.lng / n,
                temperature: mean_temp,
                severity: Severity::from_mean_temperature(mean_temp),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
struct ClusterSum {
    lat: f64,
    lng: f64,
    temp: f64,
    count: usize,
}

/// Round to 1 decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Full detection response for the API and CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResponse {
    /// Unique ID for this detection run
    pub id: String,

    /// Parameters the detection ran with
    pub request: DetectionRequest,

    /// Detected hotspots, cluster label ascending
    pub hotspots: Vec<Hotspot>,

    /// Metadata about the run
    pub metadata: DetectionMetadata,
}

/// Echo of the detection parameters and input size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRequest {
    pub eps: f64,
    pub min_samples: usize,
    pub temp_threshold: f64,
    /// Number of reports supplied
    pub report_count: usize,
}

/// Metadata about a detection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionMetadata {
    /// When this was generated
    pub timestamp: String,
    /// Reports at or above the temperature threshold
    pub eligible_reports: usize,
}

/// Run detection and wrap the result in a response envelope
pub fn analyze(reports: &[TemperatureReport], params: &DetectorParams) -> DetectionResponse {
    let eligible_reports = reports
        .iter()
        .filter(|r| r.temperature >= params.temp_threshold)
        .count();

    let hotspots = identify_hotspots(reports, params);

    DetectionResponse {
        id: uuid::Uuid::new_v4().to_string(),
        request: DetectionRequest {
            eps: params.eps,
            min_samples: params.min_samples,
            temp_threshold: params.temp_threshold,
            report_count: reports.len(),
        },
        hotspots,
        metadata: DetectionMetadata {
            timestamp: chrono::Utc::now().to_rfc3339(),
            eligible_reports,
        },
    }
}
