//! The forecast document fetched for a matched point.
//!
//! The resolver treats the document as an opaque JSON object. [`BlendedForecast`]
//! is an optional typed view over the blended 7-day layout that the upstream
//! builder writes (`metadata`, `twc_daily`, `nws_periods`); nothing in the
//! resolution path depends on it.

use crate::sources::error::FetchError;
use crate::utils::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// An opaque forecast document. Always a JSON object.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ForecastDocument(Map<String, Value>);

impl ForecastDocument {
    /// Wraps a fetched value, rejecting anything that is not a JSON object.
    pub fn from_value(reference: &str, value: Value) -> Result<Self, FetchError> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(FetchError::NotAnObject {
                reference: reference.to_string(),
                found: json_kind(&other),
            }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Interprets the document as a blended forecast.
    pub fn blended(&self) -> Result<BlendedForecast, serde_json::Error> {
        BlendedForecast::deserialize(Value::Object(self.0.clone()))
    }
}

impl From<Map<String, Value>> for ForecastDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Typed view of a blended 7-day forecast document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendedForecast {
    pub metadata: BlendMetadata,
    #[serde(default)]
    pub twc_daily: Vec<DailyForecast>,
    /// Day/night periods passed through from the NWS forecast endpoint.
    #[serde(default)]
    pub nws_periods: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendMetadata {
    #[serde(default)]
    pub generated_at: Option<String>,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub days_requested: Option<u32>,
    #[serde(default)]
    pub sources: Vec<String>,
    /// Source name to attribution line.
    #[serde(default)]
    pub attribution: HashMap<String, String>,
}

impl BlendMetadata {
    pub fn generated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.generated_at.as_deref().and_then(parse_timestamp)
    }
}

/// One day of the TWC daily forecast. Every field may be null when the
/// upstream arrays were shorter than the requested day count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    #[serde(rename = "validTimeUtc", default)]
    pub valid_time_utc: Option<i64>,
    #[serde(rename = "validTimeIso", default)]
    pub valid_time_iso: Option<String>,
    #[serde(rename = "dayOfWeek", default)]
    pub day_of_week: Option<String>,
    #[serde(rename = "tempMax_F", default)]
    pub temp_max_f: Option<f64>,
    #[serde(rename = "tempMin_F", default)]
    pub temp_min_f: Option<f64>,
    #[serde(default)]
    pub qpf_in: Option<f64>,
    #[serde(default)]
    pub narrative: Option<String>,
}

impl DailyForecast {
    /// Start of the forecast day, from the epoch seconds field.
    pub fn valid_time(&self) -> Option<DateTime<Utc>> {
        self.valid_time_utc
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }
}
