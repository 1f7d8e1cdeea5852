//! Reads documents from a local checkout of the forecast tree (e.g. `api/forecast/`).

use crate::sources::document_source::DocumentSource;
use crate::sources::error::FetchError;
use crate::utils::join_path_reference;
use log::debug;
use serde_json::Value;
use std::path::Path;

/// Filesystem document source. Point references are resolved against the
/// directory holding the index file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl DocumentSource for FileSource {
    async fn fetch(&self, reference: &str) -> Result<Value, FetchError> {
        debug!("Reading {}", reference);
        let bytes = tokio::fs::read(reference)
            .await
            .map_err(|e| FetchError::Io(reference.to_string(), e))?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::JsonParse(reference.to_string(), e))
    }

    fn join(&self, index: &str, reference: &str) -> Result<String, FetchError> {
        Ok(join_path_reference(Path::new(index), reference))
    }
}
