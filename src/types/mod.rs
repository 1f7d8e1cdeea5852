pub mod forecast_document;
pub mod forecast_point;
pub mod lat_lon;
pub mod resolution;
