//! HTTP client for the remote analysis service

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;

use pdfscope_core::{Enrichment, EnrichmentProvider, Error, Result};

use crate::config::RemoteConfig;

/// Client for the document analysis service.
///
/// Sends one request per analysis carrying the full document text. Every
/// failure class (unreachable endpoint, non-success status, malformed body,
/// timeout) comes back as an `Err`, which the analysis engine downgrades to
/// "enrichment absent". No retries.
pub struct RemoteAnalysisClient {
    config: RemoteConfig,
    client: Client,
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// Response envelope from the service; `basic_stats` is ignored since the
/// engine computes its own statistics
#[derive(Deserialize)]
struct AnalyzeResponse {
    ai_analysis: Enrichment,
}

impl RemoteAnalysisClient {
    /// Create a new client from configuration
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = RemoteConfig::from_env()?;
        Self::new(config)
    }

    pub(crate) fn endpoint(&self) -> String {
        format!("{}/api/analyze", self.config.api_url.trim_end_matches('/'))
    }

    async fn perform_request(&self, text: &str) -> Result<Enrichment> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&AnalyzeRequest { text })
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Enrichment(format!(
                "analysis service returned status {}",
                response.status()
            )));
        }

        let envelope: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        Ok(envelope.ai_analysis)
    }
}

#[async_trait]
impl EnrichmentProvider for RemoteAnalysisClient {
    async fn enrich(&self, text: &str) -> Result<Enrichment> {
        let request = self.perform_request(text);

        match timeout(Duration::from_secs(self.config.timeout_secs), request).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout("enrichment request timed out".to_string())),
        }
    }

    fn name(&self) -> &str {
        "remote"
    }
}
