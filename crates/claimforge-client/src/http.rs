//! HTTP client for the analysis service.
//!
//! Posts `{"claim": ...}` to `<base>/analyze` and projects the JSON reply onto
//! [`AnalysisResult`]. The status code is checked before the body is parsed.

use async_trait::async_trait;
use claimforge_core::{
    AnalysisBackend, AnalysisResult, ClaimError, ClaimRequest, ClaimResult, ClientConfig, Endpoint,
};
use serde::Deserialize;
use tracing::debug;

/// Longest error body kept for logging when the server sends no JSON error.
const MAX_ERROR_DETAIL: usize = 200;

/// Analysis service client.
#[derive(Clone)]
pub struct HttpAnalysisClient {
    endpoint: Endpoint,
    client: reqwest::Client,
}

/// Error body sent by the service on 4xx/5xx.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpAnalysisClient {
    /// Create a client from resolved configuration.
    pub fn new(config: &ClientConfig) -> ClaimResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClaimError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Send one claim to `/analyze`.
    pub async fn post_claim(&self, claim: &str) -> ClaimResult<AnalysisResult> {
        let url = self.endpoint.analyze_url();
        debug!(url = %url, "Posting claim");

        let response = self
            .client
            .post(&url)
            .json(&ClaimRequest::new(claim))
            .send()
            .await
            .map_err(|e| ClaimError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClaimError::Http {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClaimError::Transport(e.to_string()))?;

        let result = AnalysisResult::from_json_str(&body)?;
        debug!(
            status = status.as_u16(),
            has_summary = result.summary.is_some(),
            flags = result.flags.as_ref().map_or(0, Vec::len),
            "Received analysis"
        );

        Ok(result)
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    async fn analyze(&self, claim: &str) -> ClaimResult<AnalysisResult> {
        self.post_claim(claim).await
    }
}

/// Pull a human-readable reason out of an error response body.
fn error_detail(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return Some(parsed.error);
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_ERROR_DETAIL).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_json_error() {
        assert_eq!(
            error_detail(r#"{"error":"Missing claim text"}"#).as_deref(),
            Some("Missing claim text")
        );
    }

    #[test]
    fn test_error_detail_falls_back_to_body() {
        assert_eq!(error_detail("Bad Gateway").as_deref(), Some("Bad Gateway"));
        assert_eq!(error_detail("   "), None);
        assert_eq!(error_detail(&"x".repeat(500)).map(|d| d.len()), Some(MAX_ERROR_DETAIL));
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = HttpAnalysisClient::new(&ClientConfig::new(Endpoint::Local)).unwrap();
        assert_eq!(client.endpoint(), &Endpoint::Local);
    }
}
