//! Resolves a query string against a forecast index and prints the result as JSON.
//!
//! cargo run --example resolve_point -- "?lat=33.45&lon=-95.2" https://example.org/api/forecast/index.json
//! cargo run --example resolve_point -- "?lat=33.45&lon=-95.2" ./api/forecast/index.json

use forecast_resolver::{run, ForecastResolver, JsonSink, QueryParams, ResolveError, RunOutcome};
use std::env;
use std::io;

#[tokio::main]
async fn main() -> Result<(), ResolveError> {
    let mut args = env::args().skip(1);
    let query = QueryParams::parse(&args.next().unwrap_or_default());
    let index = args
        .next()
        .unwrap_or_else(|| forecast_resolver::DEFAULT_INDEX.to_string());

    let mut sink = JsonSink::new(io::stdout().lock());
    let outcome = if index.starts_with("http://") || index.starts_with("https://") {
        let resolver = ForecastResolver::http(index)?;
        run(&query, &resolver, &mut sink).await
    } else {
        let resolver = ForecastResolver::local(index);
        run(&query, &resolver, &mut sink).await
    };

    match outcome {
        Ok(RunOutcome::NoInput) => eprintln!("Pass a query like \"?lat=33.45&lon=-95.2\""),
        Ok(_) => {}
        Err(e) => eprintln!("Failed to write output: {e}"),
    }
    Ok(())
}
