use crate::sources::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Forecast index '{index}' contains no points")]
    NotFound { index: String },
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }

    /// The reference the error originated from: the failing document, or the empty index.
    pub fn reference(&self) -> &str {
        match self {
            ResolveError::Fetch(e) => e.reference(),
            ResolveError::NotFound { index } => index,
        }
    }
}
