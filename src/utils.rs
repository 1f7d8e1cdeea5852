use chrono::{DateTime, Utc};
use std::path::Path;

/// Parses an RFC 3339 timestamp as written by the forecast builders
/// (e.g. `2025-08-01T06:15:02.123456Z`).
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Joins `reference` onto the directory containing `base`.
/// An absolute `reference` replaces `base` entirely.
pub(crate) fn join_path_reference(base: &Path, reference: &str) -> String {
    let dir = base.parent().unwrap_or_else(|| Path::new(""));
    dir.join(reference).to_string_lossy().into_owned()
}
