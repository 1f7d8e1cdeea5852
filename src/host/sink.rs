//! Where resolution outcomes go.

use crate::error::ResolveError;
use crate::types::resolution::ResolutionResult;
use log::{error, info};
use serde_json::json;
use std::io::{self, Write};

/// Receives the outcome of a resolution.
pub trait ResultSink {
    fn emit(&mut self, result: &ResolutionResult) -> io::Result<()>;

    fn fail(&mut self, error: &ResolveError) -> io::Result<()>;
}

/// Writes results as pretty-printed JSON, and failures as `{"error": "..."}`.
#[derive(Debug)]
pub struct JsonSink<W> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn emit(&mut self, result: &ResolutionResult) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, result)?;
        writeln!(self.writer)
    }

    fn fail(&mut self, error: &ResolveError) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &json!({ "error": error.to_string() }))?;
        writeln!(self.writer)
    }
}

/// Logs a one-line summary of each outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ResultSink for LogSink {
    fn emit(&mut self, result: &ResolutionResult) -> io::Result<()> {
        let matched = result.matched_point();
        info!(
            "Forecast for ({}, {}): {} ({:.1} mi away)",
            result.requested().lat(),
            result.requested().lon(),
            matched.point.url,
            matched.distance_mi
        );
        Ok(())
    }

    fn fail(&mut self, error: &ResolveError) -> io::Result<()> {
        error!("Forecast resolution failed: {}", error);
        Ok(())
    }
}
