//! Density-based spatial clustering (DBSCAN)
//!
//! Self-contained DBSCAN over 2-D degree coordinates with planar
//! Euclidean distance. A point's neighborhood includes the point itself,
//! and a point is a core point when its neighborhood holds at least
//! `min_samples` members; clusters are formed by chaining
//! density-connected core points. Points unreachable from any core point
//! are noise.
//!
//! Labels are assigned in scan order, so for a fixed input order the
//! labeling is deterministic: cluster 0 is seeded by the first core
//! point encountered, and so on.

use crate::geo::Coordinates;

/// Label assigned to each input point: `Some(cluster)` or `None` for noise
pub type Label = Option<usize>;

/// Cluster the given points
///
/// # Arguments
/// * `points` - Input coordinates, clustered by index
/// * `eps` - Maximum neighborhood radius in degrees (inclusive)
/// * `min_samples` - Minimum neighborhood size for a core point,
///   counting the point itself
///
/// # Returns
/// One label per input point, in input order.
pub fn cluster(points: &[Coordinates], eps: f64, min_samples: usize) -> Vec<Label> {
    let mut labels: Vec<Label> = vec![None; points.len()];
    let mut visited = vec![false; points.len()];
    let mut queued = vec![false; points.len()];
    let mut next_cluster = 0;

    for i in 0..points.len() {
        if visited[i] {
            continue;
        }
        visited[i] = true;

        let neighbors = region_query(points, i, eps);
        if neighbors.len() < min_samples {
            // Not a core point; may still be claimed as a border point later
            continue;
        }

        expand_cluster(
            points,
            i,
            neighbors,
            next_cluster,
            eps,
            min_samples,
            &mut labels,
            &mut visited,
            &mut queued,
        );
        next_cluster += 1;
    }

    labels
}

/// Indices of all points within `eps` of `points[idx]`, including itself
fn region_query(points: &[Coordinates], idx: usize, eps: f64) -> Vec<usize> {
    let origin = &points[idx];
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| origin.degree_distance(p) <= eps)
        .map(|(j, _)| j)
        .collect()
}

/// Grow a cluster outward from a core point
///
/// Each point enters the seed list at most once per cluster (tracked by
/// `queued`), so the frontier stays input-proportional even when every
/// point neighbors every other.
#[allow(clippy::too_many_arguments)]
fn expand_cluster(
    points: &[Coordinates],
    core: usize,
    mut seeds: Vec<usize>,
    cluster_id: usize,
    eps: f64,
    min_samples: usize,
    labels: &mut [Label],
    visited: &mut [bool],
    queued: &mut [bool],
) {
    labels[core] = Some(cluster_id);

    for &s in &seeds {
        queued[s] = true;
    }

    let mut i = 0;
    while i < seeds.len() {
        let q = seeds[i];
        i += 1;

        if !visited[q] {
            visited[q] = true;
            let q_neighbors = region_query(points, q, eps);
            if q_neighbors.len() >= min_samples {
                // q is itself a core point; its neighborhood joins the frontier
                for j in q_neighbors {
                    if !queued[j] {
                        queued[j] = true;
                        seeds.push(j);
                    }
                }
            }
        }

        if labels[q].is_none() {
            labels[q] = Some(cluster_id);
        }
    }
}
