use crate::sources::error::FetchError;
use serde_json::Value;
use std::future::Future;

/// Where the index and forecast documents come from.
///
/// A fetch is a single read-only retrieval: no retries, no caching.
pub trait DocumentSource {
    /// Retrieves and parses the JSON document at `reference`.
    fn fetch(&self, reference: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;

    /// Turns a point's `url` into a fetchable reference, given the index it was listed in.
    ///
    /// The default uses the point's reference unchanged.
    fn join(&self, _index: &str, reference: &str) -> Result<String, FetchError> {
        Ok(reference.to_string())
    }
}

impl<S: DocumentSource> DocumentSource for &S {
    fn fetch(&self, reference: &str) -> impl Future<Output = Result<Value, FetchError>> + Send {
        (**self).fetch(reference)
    }

    fn join(&self, index: &str, reference: &str) -> Result<String, FetchError> {
        (**self).join(index, reference)
    }
}
