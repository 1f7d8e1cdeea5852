//! Host-side glue: coordinate inputs, result sinks, and the driver tying them
//! to a [`ForecastResolver`](crate::ForecastResolver).

pub mod input;
pub mod run;
pub mod sink;
