use async_trait::async_trait;
use reqwest::StatusCode;

use quakegate_core::quake::{EventSource, Result as QuakeResult};

use super::error::UpstreamError;

/// HTTP client for an FDSN event query endpoint.
#[derive(Debug, Clone)]
pub struct FdsnClient {
    client: reqwest::Client,
    endpoint: String,
}

impl FdsnClient {
    /// Create a new client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the endpoint with `params` as query string and return the body.
    ///
    /// `204 No Content` is returned as `None`; any other non-success status
    /// is an error carrying the response body.
    pub async fn query(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<Option<String>, UpstreamError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpstreamError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Some(response.text().await?))
    }
}

#[async_trait]
impl EventSource for FdsnClient {
    async fn fetch_xml(&self, params: &[(&'static str, String)]) -> QuakeResult<Option<String>> {
        tracing::debug!(endpoint = %self.endpoint, ?params, "Querying FDSN service");
        Ok(self.query(params).await?)
    }
}
