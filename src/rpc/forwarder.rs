use thiserror::Error;
use tracing::{debug, error, instrument};

#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("HTTP error! status: {status}")]
    UpstreamStatus { status: u16, body: String },
    #[error("failed to reach upstream RPC node: {0}")]
    Transport(reqwest::Error),
    #[error("upstream RPC response is not valid JSON: {0}")]
    MalformedResponse(reqwest::Error),
}

/// Stateless relay between a UI caller and one fixed upstream RPC endpoint.
/// Bodies are forwarded opaquely; no validation, batching or retry.
#[derive(Debug, Clone)]
pub struct RpcForwarder {
    upstream_url: String,
    client: reqwest::Client,
}

impl RpcForwarder {
    pub fn new(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream_url: upstream_url.into(),
            client: reqwest::Client::new(),
        }
    }

    #[instrument(skip(self, body))]
    pub async fn forward(&self, body: serde_json::Value) -> Result<serde_json::Value, ForwardError> {
        debug!(upstream = %self.upstream_url, "forwarding RPC request");
        let response = self
            .client
            .post(&self.upstream_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(ForwardError::Transport)?;

        let status = response.status();
        debug!(status = status.as_u16(), "upstream responded");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "upstream error response: {body}");
            return Err(ForwardError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(ForwardError::MalformedResponse)
    }
}
