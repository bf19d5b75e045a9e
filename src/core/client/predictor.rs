//! HTTP client for the external crop/price predictor service.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, error};

/// Thin wrapper over the predictor's `/predict` endpoint.
///
/// The predictor's response schema is owned by that service; whatever JSON it
/// answers is handed back to the caller untouched.
#[derive(Clone)]
pub struct PredictorClient {
    http: Client,
    base_url: String,
}

impl PredictorClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub async fn predict(&self, features: &[f64]) -> Result<Value> {
        let url = format!("{}/predict", self.base_url.trim_end_matches('/'));
        debug!("Calling predictor at {url} with {} features", features.len());

        let resp = self
            .http
            .post(&url)
            .json(&json!({ "features": features }))
            .send()
            .await
            .map_err(|e| anyhow!("Failed to call predictor (url={}): {}", url, e))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            error!("Predictor returned {status}: {text}");
            return Err(anyhow!("Predictor returned {}: {} (url={})", status, text, url));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| anyhow!("Failed to decode predictor response: {} (url={})", e, url))?;

        Ok(json)
    }
}
