use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::context::AppContext;

use super::coingecko::CoinGeckoApi;

/// Periodically refreshes the native currency price in the shared context.
/// A failed cycle keeps the previous price; nothing is retried before the
/// next tick.
#[derive(Debug)]
pub struct PriceRoutine {
    api: CoinGeckoApi,
    context: Arc<AppContext>,
    token_id: String,
    interval: Duration,
}

impl PriceRoutine {
    pub fn new(
        api: CoinGeckoApi,
        context: Arc<AppContext>,
        token_id: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            api,
            context,
            token_id: token_id.into(),
            interval,
        }
    }

    #[instrument(skip(self))]
    pub async fn refresh_once(&self) {
        if let Err(e) = self.context.set_native_currency_fetching(true) {
            warn!("failed to flag price fetch start: {e}");
        }

        match self.api.usd_price(&self.token_id).await {
            Ok(price) => {
                info!(token = %self.token_id, price, "native currency price updated");
                if let Err(e) = self.context.set_native_currency_price(price) {
                    warn!("failed to write native currency price: {e}");
                }
            }
            Err(report) => {
                warn!(token = %self.token_id, "failed to refresh price: {report:?}");
            }
        }

        if let Err(e) = self.context.set_native_currency_fetching(false) {
            warn!("failed to flag price fetch end: {e}");
        }
    }

    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.interval);
        loop {
            interval.tick().await;
            self.refresh_once().await;
        }
    }
}
