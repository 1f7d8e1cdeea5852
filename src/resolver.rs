//! The forecast resolver: maps a coordinate to the nearest pre-generated forecast
//! document listed in a forecast index.

use crate::error::ResolveError;
use crate::points::locate_point::{nearest_point, nearest_points};
use crate::sources::document_source::DocumentSource;
use crate::sources::error::FetchError;
use crate::sources::file_source::FileSource;
use crate::sources::http_source::HttpSource;
use crate::types::forecast_document::ForecastDocument;
use crate::types::forecast_point::{ForecastIndex, ForecastPoint};
use crate::types::lat_lon::LatLon;
use crate::types::resolution::{MatchedPoint, Resolution, ResolutionResult};
use bon::bon;
use log::{debug, info};

/// Where the forecast builder writes its index, relative to the site root.
///
/// This is a relative path, usable as-is with [`FileSource`]. [`HttpSource`] only
/// accepts absolute URLs, so HTTP resolvers must be given an index URL
/// (see [`ForecastResolver::http`]).
pub const DEFAULT_INDEX: &str = "api/forecast/index.json";

/// Resolves coordinates against a forecast index.
///
/// The index is fetched again on every call; nothing is cached between calls and
/// the resolver holds no mutable state, so concurrent calls are independent.
///
/// # Examples
///
/// ```no_run
/// # use forecast_resolver::{ForecastResolver, LatLon, ResolveError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ResolveError> {
/// let resolver = ForecastResolver::http("https://example.org/api/forecast/index.json")?;
/// let result = resolver.resolve(LatLon(33.45, -95.2)).await?;
/// println!(
///     "Matched {} at {:.1} mi",
///     result.matched_point().point.url,
///     result.matched_point().distance_mi
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ForecastResolver<S> {
    source: S,
    index: String,
}

#[bon]
impl<S: DocumentSource> ForecastResolver<S> {
    /// Creates a resolver.
    ///
    /// * `.source(S)`: **Required.** The [`DocumentSource`] both documents are fetched through.
    /// * `.index(..)`: Optional. Reference of the index document. Defaults to [`DEFAULT_INDEX`],
    ///   a relative path; with [`HttpSource`] set an absolute URL here, otherwise every
    ///   call fails with [`FetchError::InvalidReference`].
    #[builder]
    pub fn new(
        source: S,
        #[builder(into, default = DEFAULT_INDEX.to_string())] index: String,
    ) -> Self {
        Self { source, index }
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches and parses the index document.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Fetch`] naming the index if it cannot be retrieved or is not
    /// a valid index.
    pub async fn load_index(&self) -> Result<ForecastIndex, ResolveError> {
        let value = self.source.fetch(&self.index).await?;
        let index: ForecastIndex = serde_json::from_value(value)
            .map_err(|e| FetchError::JsonParse(self.index.clone(), e))?;
        debug!("Loaded {} forecast points from {}", index.points.len(), self.index);
        Ok(index)
    }

    /// Resolves `requested` to the nearest forecast point and returns its document,
    /// annotated with the requested coordinate and the matched point.
    ///
    /// # Errors
    ///
    /// * [`ResolveError::Fetch`] if the index or the matched document cannot be retrieved.
    /// * [`ResolveError::NotFound`] if the index has no points. No document fetch is made.
    pub async fn resolve(&self, requested: LatLon) -> Result<ResolutionResult, ResolveError> {
        let index = self.load_index().await?;
        let (point, distance_mi) =
            nearest_point(&index.points, requested).ok_or_else(|| ResolveError::NotFound {
                index: self.index.clone(),
            })?;
        info!(
            "Resolved ({}, {}) to {} at {:.2} mi",
            requested.lat(),
            requested.lon(),
            point.url,
            distance_mi
        );

        let reference = self.source.join(&self.index, &point.url)?;
        let value = self.source.fetch(&reference).await?;
        let document = ForecastDocument::from_value(&reference, value)?;

        Ok(ResolutionResult::new(
            document,
            Resolution {
                requested,
                matched_point: MatchedPoint {
                    point: point.clone(),
                    distance_mi,
                },
            },
        ))
    }

    /// Lists index points near a location, closest first. Only the index is fetched.
    ///
    /// * `.location(LatLon)`: **Required.** Where to search from.
    /// * `.max_distance_mi(f64)`: Optional. Drop points farther away than this. Unbounded by default.
    /// * `.point_limit(usize)`: Optional. Maximum number of points returned. Defaults to `5`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Fetch`] if the index cannot be retrieved.
    #[builder]
    pub async fn find_points(
        &self,
        location: LatLon,
        max_distance_mi: Option<f64>,
        point_limit: Option<usize>,
    ) -> Result<Vec<(ForecastPoint, f64)>, ResolveError> {
        let point_limit = point_limit.unwrap_or(5);
        let index = self.load_index().await?;
        Ok(nearest_points(
            &index.points,
            location,
            point_limit,
            max_distance_mi,
        ))
    }
}

impl ForecastResolver<HttpSource> {
    /// Resolver over HTTP with a default [`HttpSource`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Fetch`] if the HTTP client cannot be built.
    pub fn http(index_url: impl Into<String>) -> Result<Self, ResolveError> {
        let source = HttpSource::builder().build()?;
        Ok(Self::builder().source(source).index(index_url).build())
    }
}

impl ForecastResolver<FileSource> {
    /// Resolver over a local forecast tree, e.g. a checkout containing `api/forecast/`.
    pub fn local(index_path: impl Into<String>) -> Self {
        Self::builder().source(FileSource).index(index_path).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// In-memory source recording every reference it is asked for.
    #[derive(Clone, Default)]
    struct MemorySource {
        documents: HashMap<String, Value>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MemorySource {
        fn with(mut self, reference: &str, value: Value) -> Self {
            self.documents.insert(reference.to_string(), value);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl DocumentSource for MemorySource {
        async fn fetch(&self, reference: &str) -> Result<Value, FetchError> {
            self.calls.lock().unwrap().push(reference.to_string());
            self.documents.get(reference).cloned().ok_or_else(|| {
                FetchError::Io(
                    reference.to_string(),
                    std::io::Error::new(std::io::ErrorKind::NotFound, "not in memory"),
                )
            })
        }
    }

    fn index(points: &[(f64, f64, &str)]) -> Value {
        json!({
            "generated_at": "2025-08-01T06:00:00Z",
            "points": points
                .iter()
                .map(|(lat, lon, url)| json!({"lat": lat, "lon": lon, "url": url}))
                .collect::<Vec<_>>()
        })
    }

    fn resolver(source: MemorySource) -> ForecastResolver<MemorySource> {
        ForecastResolver::builder().source(source).build()
    }

    #[tokio::test]
    async fn resolves_to_the_nearest_document() {
        let source = MemorySource::default()
            .with(
                DEFAULT_INDEX,
                index(&[
                    (33.51, -95.14, "texarkana.json"),
                    (30.63, -87.04, "milton.json"),
                ]),
            )
            .with("texarkana.json", json!({"name": "Texarkana"}))
            .with("milton.json", json!({"name": "Milton"}));
        let resolver = resolver(source.clone());

        let requested = LatLon(30.5, -87.2);
        let result = resolver.resolve(requested).await.unwrap();

        assert_eq!(result.document().get("name"), Some(&json!("Milton")));
        assert_eq!(result.requested(), requested);
        assert_eq!(result.matched_point().point.url, "milton.json");
        // Haversine on a 3958.8 mi sphere, (30.5, -87.2) -> (30.63, -87.04).
        let distance = result.matched_point().distance_mi;
        assert!((distance - 13.087838017).abs() < 1e-6, "{distance}");
        assert_eq!(source.calls(), vec![DEFAULT_INDEX, "milton.json"]);
    }

    #[tokio::test]
    async fn serialized_result_carries_resolution() {
        let source = MemorySource::default()
            .with(DEFAULT_INDEX, index(&[(0.0, 0.0, "a.json")]))
            .with("a.json", json!({"twc_daily": []}));
        let result = resolver(source).resolve(LatLon(0.0, 0.4)).await.unwrap();

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["twc_daily"], json!([]));
        assert_eq!(value["resolution"]["requested"], json!({"lat": 0.0, "lon": 0.4}));
        assert_eq!(value["resolution"]["matched_point"]["url"], json!("a.json"));
        let distance = value["resolution"]["matched_point"]["distance_mi"].as_f64().unwrap();
        assert!((distance - 27.637637771).abs() < 1e-6, "{distance}");
    }

    #[tokio::test]
    async fn empty_index_is_not_found_without_document_fetch() {
        let source = MemorySource::default().with(DEFAULT_INDEX, index(&[]));
        let err = resolver(source.clone())
            .resolve(LatLon(1.0, 2.0))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.reference(), DEFAULT_INDEX);
        assert_eq!(source.calls(), vec![DEFAULT_INDEX]);
    }

    #[tokio::test]
    async fn missing_index_is_a_fetch_error() {
        let source = MemorySource::default();
        let err = resolver(source.clone())
            .resolve(LatLon(1.0, 2.0))
            .await
            .unwrap_err();

        assert!(matches!(err, ResolveError::Fetch(FetchError::Io(..))));
        assert_eq!(err.reference(), DEFAULT_INDEX);
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test]
    async fn malformed_index_is_a_fetch_error() {
        let source = MemorySource::default().with(DEFAULT_INDEX, json!({"pts": []}));
        let err = resolver(source).resolve(LatLon(1.0, 2.0)).await.unwrap_err();
        assert!(matches!(err, ResolveError::Fetch(FetchError::JsonParse(..))));
        assert!(err.to_string().contains(DEFAULT_INDEX));
    }

    #[tokio::test]
    async fn missing_document_names_the_document() {
        let source =
            MemorySource::default().with(DEFAULT_INDEX, index(&[(10.0, 10.0, "gone.json")]));
        let err = resolver(source.clone())
            .resolve(LatLon(10.0, 10.0))
            .await
            .unwrap_err();

        assert!(matches!(err, ResolveError::Fetch(_)));
        assert_eq!(err.reference(), "gone.json");
        assert_eq!(source.calls(), vec![DEFAULT_INDEX, "gone.json"]);
    }

    #[tokio::test]
    async fn non_object_document_is_rejected() {
        let source = MemorySource::default()
            .with(DEFAULT_INDEX, index(&[(10.0, 10.0, "list.json")]))
            .with("list.json", json!([1, 2, 3]));
        let err = resolver(source).resolve(LatLon(0.0, 0.0)).await.unwrap_err();
        assert!(matches!(
            err,
            ResolveError::Fetch(FetchError::NotAnObject { .. })
        ));
    }

    #[tokio::test]
    async fn index_is_reloaded_on_every_call() {
        let source = MemorySource::default()
            .with("custom/index.json", index(&[(1.0, 1.0, "one.json")]))
            .with("one.json", json!({}));
        let resolver = ForecastResolver::builder()
            .source(source.clone())
            .index("custom/index.json")
            .build();

        resolver.resolve(LatLon(0.0, 0.0)).await.unwrap();
        resolver.resolve(LatLon(0.0, 0.0)).await.unwrap();
        let index_fetches = source
            .calls()
            .iter()
            .filter(|r| *r == "custom/index.json")
            .count();
        assert_eq!(index_fetches, 2);
    }

    #[tokio::test]
    async fn finds_ranked_points() {
        let source = MemorySource::default().with(
            DEFAULT_INDEX,
            index(&[
                (0.0, 3.0, "c.json"),
                (0.0, 1.0, "a.json"),
                (0.0, 2.0, "b.json"),
            ]),
        );
        let resolver = resolver(source.clone());

        let found = resolver
            .find_points()
            .location(LatLon(0.0, 0.0))
            .max_distance_mi(150.0)
            .call()
            .await
            .unwrap();
        let urls: Vec<&str> = found.iter().map(|(p, _)| p.url.as_str()).collect();
        assert_eq!(urls, vec!["a.json", "b.json"]);

        let all = resolver
            .find_points()
            .location(LatLon(0.0, 0.0))
            .point_limit(1)
            .call()
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(source.calls(), vec![DEFAULT_INDEX, DEFAULT_INDEX]);
    }
}
