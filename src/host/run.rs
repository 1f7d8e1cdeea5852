use crate::host::input::CoordinateInput;
use crate::host::sink::ResultSink;
use crate::resolver::ForecastResolver;
use crate::sources::document_source::DocumentSource;
use log::debug;
use std::io;

/// What a [`run`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No usable coordinate; nothing was resolved and the sink was not called.
    NoInput,
    /// A result was handed to the sink.
    Resolved,
    /// Resolution failed and the error was handed to the sink.
    Failed,
}

/// Reads a coordinate from `input`, resolves it, and hands the outcome to `sink`.
///
/// # Errors
///
/// Only sink write failures are returned; resolution errors go to the sink.
pub async fn run<I, S, K>(
    input: &I,
    resolver: &ForecastResolver<S>,
    sink: &mut K,
) -> io::Result<RunOutcome>
where
    I: CoordinateInput + ?Sized,
    S: DocumentSource,
    K: ResultSink + ?Sized,
{
    let Some(coordinate) = input.coordinate() else {
        debug!("No coordinate supplied; skipping resolution");
        return Ok(RunOutcome::NoInput);
    };

    match resolver.resolve(coordinate).await {
        Ok(result) => {
            sink.emit(&result)?;
            Ok(RunOutcome::Resolved)
        }
        Err(e) => {
            sink.fail(&e)?;
            Ok(RunOutcome::Failed)
        }
    }
}
