//! Remote analysis service configuration

use serde::{Deserialize, Serialize};
use std::env;

use pdfscope_core::{Error, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the remote analysis service client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub api_url: String,
    pub timeout_secs: u64,
}

impl RemoteConfig {
    /// Create configuration from environment variables.
    ///
    /// `PDFSCOPE_API_URL` selects the service; its absence means remote
    /// enrichment is not configured and surfaces as a Configuration error
    /// for the caller to interpret.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_url = env::var("PDFSCOPE_API_URL").map_err(|_| {
            Error::Configuration(
                "PDFSCOPE_API_URL environment variable not found".to_string(),
            )
        })?;

        let timeout_secs = env::var("PDFSCOPE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self { api_url, timeout_secs })
    }

    /// Create configuration with an explicit service URL
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
