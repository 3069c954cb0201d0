use reqwest::Client as ReqwestClient;
use tracing::{debug, error, info};

use crate::error::ApiError;
use crate::structs::{GenerationRequest, GenerationResponse, Tone};

const GENERATE_PATH: &str = "/api/generateMicrocopy/";

/// Client for the microcopy generation backend.
///
/// Construct one per backend; `generate` takes `&self`, so concurrent calls
/// on the same client are fine and independent of each other.
#[derive(Debug, Clone)]
pub struct MicrocopyClient {
    client: ReqwestClient,
    base_url: String,
}

impl MicrocopyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(ReqwestClient::new(), base_url)
    }

    /// Use an existing reqwest client (shared connection pool, custom TLS).
    pub fn with_client(client: ReqwestClient, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Ask the backend for alternative phrasings of `text` in the given tone.
    ///
    /// Returns the alternatives verbatim and in order; an empty list means
    /// the backend had nothing to offer, not an error. One outbound request
    /// per call, no retries.
    pub async fn generate(&self, text: &str, tone: Tone) -> Result<Vec<String>, ApiError> {
        let request = GenerationRequest {
            text: text.to_string(),
            tone,
        };

        debug!("Requesting {} alternatives for {} chars", tone, text.len());

        // Send the request
        let response = self
            .client
            .post(format!("{}{GENERATE_PATH}", self.base_url))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Error sending request: {e}");
                ApiError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Backend returned status {status}");
            return Err(ApiError::Status(status.as_u16()));
        }

        // Parse the response
        let body = response.text().await.map_err(|e| {
            error!("Error reading response body: {e}");
            ApiError::Transport(e)
        })?;
        let parsed: GenerationResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Error parsing response: {e}");
            ApiError::InvalidFormat
        })?;

        info!("Received {} alternatives", parsed.alternatives.len());
        Ok(parsed.alternatives)
    }
}
