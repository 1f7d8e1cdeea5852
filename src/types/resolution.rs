use crate::types::forecast_document::ForecastDocument;
use crate::types::forecast_point::ForecastPoint;
use crate::types::lat_lon::LatLon;
use log::warn;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Name of the field carrying the [`Resolution`] in a serialized [`ResolutionResult`].
pub const RESOLUTION_FIELD: &str = "resolution";

/// The index point that won the nearest-point search, with its distance to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedPoint {
    #[serde(flatten)]
    pub point: ForecastPoint,
    pub distance_mi: f64,
}

/// How a query coordinate was resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// The coordinate exactly as it was requested.
    pub requested: LatLon,
    pub matched_point: MatchedPoint,
}

/// A forecast document together with the record of how it was chosen.
///
/// The document and the resolution are kept apart. When serialized, the document's
/// own fields are written first, followed by a [`RESOLUTION_FIELD`] entry. A document
/// field with that same name is left out of the serialized form (it stays reachable
/// through [`ResolutionResult::document`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionResult {
    document: ForecastDocument,
    resolution: Resolution,
}

impl ResolutionResult {
    pub fn new(document: ForecastDocument, resolution: Resolution) -> Self {
        if document.get(RESOLUTION_FIELD).is_some() {
            warn!(
                "Forecast document '{}' has its own '{}' field; it is shadowed when serialized",
                resolution.matched_point.point.url, RESOLUTION_FIELD
            );
        }
        Self {
            document,
            resolution,
        }
    }

    pub fn document(&self) -> &ForecastDocument {
        &self.document
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn requested(&self) -> LatLon {
        self.resolution.requested
    }

    pub fn matched_point(&self) -> &MatchedPoint {
        &self.resolution.matched_point
    }

    pub fn into_parts(self) -> (ForecastDocument, Resolution) {
        (self.document, self.resolution)
    }
}

impl Serialize for ResolutionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.document.fields();
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in fields.iter().filter(|(key, _)| *key != RESOLUTION_FIELD) {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(RESOLUTION_FIELD, &self.resolution)?;
        map.end()
    }
}
