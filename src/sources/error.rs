use thiserror::Error;

/// A document could not be retrieved. Every variant names the reference it concerns.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Invalid document reference '{reference}'")]
    InvalidReference {
        reference: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read document '{0}'")]
    Io(String, #[source] std::io::Error),

    #[error("Failed to parse JSON document '{0}'")]
    JsonParse(String, #[source] serde_json::Error),

    #[error("Document '{reference}' is a JSON {found}, expected an object")]
    NotAnObject {
        reference: String,
        found: &'static str,
    },
}

impl FetchError {
    /// The reference (URL or path) of the document that failed. Empty for
    /// [`FetchError::ClientBuild`], which happens before any document is requested.
    pub fn reference(&self) -> &str {
        match self {
            FetchError::ClientBuild(_) => "",
            FetchError::InvalidReference { reference, .. } => reference,
            FetchError::NetworkRequest(reference, _) => reference,
            FetchError::HttpStatus { url, .. } => url,
            FetchError::Io(reference, _) => reference,
            FetchError::JsonParse(reference, _) => reference,
            FetchError::NotAnObject { reference, .. } => reference,
        }
    }

    /// HTTP status of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
