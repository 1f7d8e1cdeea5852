//! Resolve a coordinate to the nearest pre-generated forecast document listed in a
//! static forecast index, and return that document annotated with how it was matched.

mod error;
mod host;
mod points;
mod resolver;
mod sources;
mod types;
mod utils;

pub use error::ResolveError;
pub use resolver::*;

pub use sources::document_source::DocumentSource;
pub use sources::error::FetchError;
pub use sources::file_source::FileSource;
pub use sources::http_source::HttpSource;

pub use points::locate_point::{distance_mi, nearest_point, nearest_points, EARTH_RADIUS_MI};

pub use types::forecast_document::*;
pub use types::forecast_point::*;
pub use types::lat_lon::LatLon;
pub use types::resolution::*;

pub use host::input::{CoordinateInput, QueryParams};
pub use host::run::{run, RunOutcome};
pub use host::sink::{JsonSink, LogSink, ResultSink};
