//! Fetches documents over HTTP(S).

use crate::sources::document_source::DocumentSource;
use crate::sources::error::FetchError;
use bon::bon;
use log::{debug, warn};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("forecast-resolver/", env!("CARGO_PKG_VERSION"));

/// HTTP document source.
///
/// Requests carry `Cache-Control: no-cache` so that intermediate caches never
/// serve a stale index. Relative point references are joined onto the index URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

#[bon]
impl HttpSource {
    /// Builds an HTTP source.
    ///
    /// * `.user_agent(..)`: Optional. Defaults to `forecast-resolver/<version>`.
    /// * `.timeout(..)`: Optional. Per-request timeout; none by default.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ClientBuild`] if the underlying client cannot be created.
    #[builder]
    pub fn new(
        #[builder(into)] user_agent: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .user_agent(user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::ClientBuild)?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, reference: &str) -> Result<Value, FetchError> {
        let url = Url::parse(reference).map_err(|e| FetchError::InvalidReference {
            reference: reference.to_string(),
            source: e,
        })?;
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(reference.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", reference, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: reference.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(reference.to_string(), e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::NetworkRequest(reference.to_string(), e))?;
        serde_json::from_slice(&body).map_err(|e| FetchError::JsonParse(reference.to_string(), e))
    }

    fn join(&self, index: &str, reference: &str) -> Result<String, FetchError> {
        let base = Url::parse(index).map_err(|e| FetchError::InvalidReference {
            reference: index.to_string(),
            source: e,
        })?;
        base.join(reference)
            .map(String::from)
            .map_err(|e| FetchError::InvalidReference {
                reference: reference.to_string(),
                source: e,
            })
    }
}
