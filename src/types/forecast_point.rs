//! Data structures for the forecast index: the catalog of forecast points
//! and the references to their pre-generated forecast documents.

use crate::types::lat_lon::LatLon;
use crate::utils::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry of the forecast index.
///
/// Identity is positional: two points with equal fields at different positions
/// in the index are still distinct entries.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Reference to the forecast document, either absolute or relative to the index.
    pub url: String,
}

impl ForecastPoint {
    pub fn location(&self) -> LatLon {
        LatLon(self.lat, self.lon)
    }
}

/// The index document listing every available forecast point, in order.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ForecastIndex {
    /// Build time as written by the index builder. Kept raw so that an odd
    /// timestamp never makes the whole index unreadable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    pub points: Vec<ForecastPoint>,
}

impl ForecastIndex {
    /// Parsed [`ForecastIndex::generated_at`], if present and valid RFC 3339.
    pub fn generated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.generated_at.as_deref().and_then(parse_timestamp)
    }
}
