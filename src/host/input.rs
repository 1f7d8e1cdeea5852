//! Where the coordinate to resolve comes from.

use crate::types::lat_lon::LatLon;
use std::borrow::Cow;
use url::{form_urlencoded, Url};

/// Supplies the coordinate for a resolution, or `None` when there is nothing to resolve.
pub trait CoordinateInput {
    fn coordinate(&self) -> Option<LatLon>;
}

impl CoordinateInput for LatLon {
    fn coordinate(&self) -> Option<LatLon> {
        Some(*self)
    }
}

impl CoordinateInput for Option<LatLon> {
    fn coordinate(&self) -> Option<LatLon> {
        *self
    }
}

/// `lat` / `lon` parameters taken from a request's query string.
///
/// Only the first occurrence of each parameter counts. Both must be present and
/// parse as finite decimal numbers; anything else yields no coordinate.
///
/// ```
/// use forecast_resolver::{CoordinateInput, LatLon, QueryParams};
///
/// let q = QueryParams::parse("?lat=33.51&lon=-95.14");
/// assert_eq!(q.coordinate(), Some(LatLon(33.51, -95.14)));
/// assert_eq!(QueryParams::parse("?lat=33.51").coordinate(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    lat: Option<String>,
    lon: Option<String>,
}

impl QueryParams {
    /// Parses a bare query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Takes the query string of a full URL.
    pub fn from_url(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs())
    }

    fn from_pairs<'a>(pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "lat" if params.lat.is_none() => params.lat = Some(value.into_owned()),
                "lon" if params.lon.is_none() => params.lon = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }

    pub fn lat(&self) -> Option<&str> {
        self.lat.as_deref()
    }

    pub fn lon(&self) -> Option<&str> {
        self.lon.as_deref()
    }
}

impl CoordinateInput for QueryParams {
    fn coordinate(&self) -> Option<LatLon> {
        let lat = parse_degrees(self.lat.as_deref()?)?;
        let lon = parse_degrees(self.lon.as_deref()?)?;
        Some(LatLon(lat, lon))
    }
}

fn parse_degrees(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_question_mark() {
        assert_eq!(
            QueryParams::parse("lat=30.63&lon=-87.04").coordinate(),
            Some(LatLon(30.63, -87.04))
        );
        assert_eq!(
            QueryParams::parse("?lon=-87.04&units=e&lat=30.63").coordinate(),
            Some(LatLon(30.63, -87.04))
        );
    }

    #[test]
    fn reads_full_urls() {
        let url = Url::parse("https://wx.example.org/forecast.html?lat=%2033.5&lon=-95.1#top").unwrap();
        let params = QueryParams::from_url(&url);
        assert_eq!(params.lat(), Some(" 33.5"));
        assert_eq!(params.coordinate(), Some(LatLon(33.5, -95.1)));
    }

    #[test]
    fn missing_or_malformed_values_give_no_coordinate() {
        for query in [
            "",
            "?",
            "lat=33.5",
            "lon=-95.1",
            "lat=&lon=-95.1",
            "lat=abc&lon=-95.1",
            "lat=33.5&lon=12abc",
            "lat=NaN&lon=1",
            "lat=inf&lon=1",
        ] {
            assert_eq!(QueryParams::parse(query).coordinate(), None, "{query}");
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let params = QueryParams::parse("lat=1&lat=2&lon=3&lon=4");
        assert_eq!(params.coordinate(), Some(LatLon(1.0, 3.0)));
    }

    #[test]
    fn out_of_range_values_pass_through() {
        assert_eq!(
            QueryParams::parse("lat=123&lon=-400").coordinate(),
            Some(LatLon(123.0, -400.0))
        );
    }

    #[test]
    fn fixed_inputs() {
        assert_eq!(LatLon(1.0, 2.0).coordinate(), Some(LatLon(1.0, 2.0)));
        assert_eq!(None::<LatLon>.coordinate(), None);
    }
}
