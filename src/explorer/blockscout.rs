use chrono::Utc;
use error_stack::{Report, ResultExt};
use tracing::instrument;

use super::{BalanceQueryResult, BlockExplorer, ExplorerError, ExplorerResult};

#[derive(serde::Deserialize, serde::Serialize, Debug)]
struct FetchAddressResponse {
    coin_balance: String,
}

/// Blockscout v2 client bound to one explorer base URL.
#[derive(Debug)]
pub struct BlockscoutExplorer {
    base_url: String,
    client: reqwest::Client,
}

impl BlockscoutExplorer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl BlockExplorer for BlockscoutExplorer {
    #[instrument(skip(self))]
    async fn fetch_native_balance(&self, address: &str) -> ExplorerResult<BalanceQueryResult> {
        let base_url = self.base_url.as_str();
        let url = format!("{base_url}/api/v2/addresses/{address}");
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .change_context(ExplorerError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Report::new(ExplorerError::UpstreamStatus(status.as_u16())));
        }

        let body: FetchAddressResponse = response
            .json()
            .await
            .change_context(ExplorerError::MalformedResponse)?;

        Ok(BalanceQueryResult {
            address_queried: address.to_string(),
            raw_balance_smallest_unit: body.coin_balance,
            fetched_at: Utc::now(),
        })
    }
}
