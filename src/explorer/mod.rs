use chrono::{DateTime, Utc};
use thiserror::Error;

pub mod blockscout;

/// One explorer balance query, ephemeral per address change.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceQueryResult {
    pub address_queried: String,
    /// Decimal integer string counting smallest currency units.
    pub raw_balance_smallest_unit: String,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("explorer returned HTTP status {0}")]
    UpstreamStatus(u16),
    #[error("failed to reach the explorer")]
    Transport,
    #[error("explorer response is malformed")]
    MalformedResponse,
}

pub type ExplorerResult<T> = error_stack::Result<T, ExplorerError>;

#[async_trait::async_trait]
pub trait BlockExplorer: Send + Sync + std::fmt::Debug {
    async fn fetch_native_balance(&self, address: &str) -> ExplorerResult<BalanceQueryResult>;
}
