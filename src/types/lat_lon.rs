use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are decimal degrees. Out-of-range values (e.g. `|lat| > 90`) are
/// accepted as-is; nothing in this crate rejects them.
///
/// # Examples
///
/// ```
/// use forecast_resolver::LatLon;
///
/// let texarkana = LatLon(33.51, -95.14);
/// assert_eq!(texarkana.lat(), 33.51);
/// assert_eq!(texarkana.lon(), -95.14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lon(&self) -> f64 {
        self.1
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

// Serialized as `{"lat": .., "lon": ..}` to match the index document's point layout.
impl Serialize for LatLon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LatLon", 2)?;
        state.serialize_field("lat", &self.0)?;
        state.serialize_field("lon", &self.1)?;
        state.end()
    }
}
