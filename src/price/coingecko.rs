use std::collections::HashMap;

use error_stack::{Report, ResultExt};
use thiserror::Error;
use tracing::instrument;

#[derive(Error, Debug)]
pub enum PriceError {
    #[error("failed to reach the price API")]
    Transport,
    #[error("price API returned HTTP status {0}")]
    UpstreamStatus(u16),
    #[error("price API response is malformed")]
    MalformedResponse,
    #[error("no USD price returned for token {0:?}")]
    MissingToken(String),
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct PriceResponse {
    pub usd: Option<f64>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct PricesResponse(pub HashMap<String, PriceResponse>);

/// CoinGecko `simple/price` client.
#[derive(Debug)]
pub struct CoinGeckoApi {
    base_url: String,
    client: reqwest::Client,
}

impl Default for CoinGeckoApi {
    fn default() -> Self {
        Self::with_base_url("https://api.coingecko.com")
    }
}

impl CoinGeckoApi {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    #[instrument(skip(self))]
    pub async fn usd_price(&self, token_id: &str) -> error_stack::Result<f64, PriceError> {
        let base_url = self.base_url.as_str();
        let url = format!("{base_url}/api/v3/simple/price?ids={token_id}&vs_currencies=usd");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .change_context(PriceError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Report::new(PriceError::UpstreamStatus(status.as_u16())));
        }

        let prices: PricesResponse = response
            .json()
            .await
            .change_context(PriceError::MalformedResponse)?;

        prices
            .0
            .get(token_id)
            .and_then(|price| price.usd)
            .ok_or_else(|| Report::new(PriceError::MissingToken(token_id.to_string())))
    }
}
