//! Nearest-point search over the forecast index.
//!
//! The index is small and reloaded for every request, so a linear scan is used
//! instead of a spatial tree: every point gets an exact haversine distance, and
//! ties resolve to the earliest point in index order.

use crate::types::forecast_point::ForecastPoint;
use crate::types::lat_lon::LatLon;
use haversine::{distance, Location as HaversineLocation, Units};
use ordered_float::OrderedFloat;

/// Mean Earth radius in miles used by the distance computation.
pub const EARTH_RADIUS_MI: f64 = 3958.8;

// Radius behind `Units::Kilometers` in the haversine crate. Its `Units::Miles`
// uses 3960.0, so distances are computed on the kilometre sphere and rescaled.
const HAVERSINE_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in miles between two coordinates (haversine formula,
/// sphere of radius [`EARTH_RADIUS_MI`]).
pub fn distance_mi(from: LatLon, to: LatLon) -> f64 {
    let dist_km = distance(
        HaversineLocation {
            latitude: from.lat(),
            longitude: from.lon(),
        },
        HaversineLocation {
            latitude: to.lat(),
            longitude: to.lon(),
        },
        Units::Kilometers,
    );
    dist_km * (EARTH_RADIUS_MI / HAVERSINE_RADIUS_KM)
}

/// Finds the point closest to `location`, with its distance in miles.
///
/// Scans in index order and only replaces the current best on a strictly smaller
/// distance, so the first of several equally near points wins. Returns `None` for
/// an empty slice, and also when no distance compares below infinity (NaN input).
pub fn nearest_point(
    points: &[ForecastPoint],
    location: LatLon,
) -> Option<(&ForecastPoint, f64)> {
    let mut best: Option<(&ForecastPoint, f64)> = None;
    let mut best_distance = f64::INFINITY;

    for point in points {
        let dist_mi = distance_mi(location, point.location());
        if dist_mi < best_distance {
            best_distance = dist_mi;
            best = Some((point, dist_mi));
        }
    }
    best
}

/// Returns up to `limit` points sorted by distance from `location`, closest first.
///
/// Points farther than `max_distance_mi` (when given) are dropped. The sort is
/// stable, so equally distant points keep their index order.
pub fn nearest_points(
    points: &[ForecastPoint],
    location: LatLon,
    limit: usize,
    max_distance_mi: Option<f64>,
) -> Vec<(ForecastPoint, f64)> {
    if limit == 0 {
        return vec![];
    }

    let mut candidates: Vec<(&ForecastPoint, f64)> = points
        .iter()
        .map(|point| (point, distance_mi(location, point.location())))
        .filter(|(_, dist_mi)| !dist_mi.is_nan())
        .filter(|(_, dist_mi)| max_distance_mi.map_or(true, |max| *dist_mi <= max))
        .collect();

    candidates.sort_by_key(|(_, dist_mi)| OrderedFloat(*dist_mi));
    candidates.truncate(limit);
    candidates
        .into_iter()
        .map(|(point, dist_mi)| (point.to_owned(), dist_mi))
        .collect()
}
