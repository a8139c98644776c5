use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::context::NativeCurrencyState;
use crate::explorer::{BalanceQueryResult, BlockExplorer, ExplorerResult};

use super::formatting::{format_fiat, format_native, smallest_units_to_display};

/// Fetch lifecycle of one balance view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// One outbound balance query, tagged so stale responses can be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub address: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BalanceDisplay {
    Placeholder,
    Error,
    Value(String),
}

/// Balance of one address, rendered in native units or fiat.
///
/// Driven by discrete events: `address_changed` starts a fetch cycle and
/// `response_received` completes it. Each cycle carries a generation number;
/// a response from a superseded cycle is ignored, so a slow fetch for an old
/// address can never overwrite the balance of a newer one.
#[derive(Debug)]
pub struct BalanceView {
    state: FetchState,
    address: Option<String>,
    balance: Option<f64>,
    result: Option<BalanceQueryResult>,
    generation: u64,
    display_fiat: bool,
}

impl BalanceView {
    pub fn new(default_fiat_mode: Option<bool>) -> Self {
        Self {
            state: FetchState::Idle,
            address: None,
            balance: None,
            result: None,
            generation: 0,
            display_fiat: default_fiat_mode.unwrap_or(false),
        }
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn balance(&self) -> Option<f64> {
        self.balance
    }

    pub fn last_result(&self) -> Option<&BalanceQueryResult> {
        self.result.as_ref()
    }

    /// A new address restarts the cycle at `Loading`; a cleared address
    /// parks the view at `Idle`. Either way prior balance and error state
    /// are discarded.
    pub fn address_changed(&mut self, address: Option<String>) -> Option<FetchRequest> {
        self.generation += 1;
        self.balance = None;
        self.result = None;
        self.address = address;

        match &self.address {
            Some(address) => {
                self.state = FetchState::Loading;
                Some(FetchRequest {
                    address: address.clone(),
                    generation: self.generation,
                })
            }
            None => {
                self.state = FetchState::Idle;
                None
            }
        }
    }

    pub fn response_received(
        &mut self,
        generation: u64,
        outcome: ExplorerResult<BalanceQueryResult>,
    ) {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "discarding stale balance response"
            );
            return;
        }

        match outcome {
            Ok(result) => match smallest_units_to_display(&result.raw_balance_smallest_unit) {
                Ok(balance) => {
                    self.balance = Some(balance);
                    self.result = Some(result);
                    self.state = FetchState::Loaded;
                }
                Err(e) => {
                    warn!("malformed balance for {}: {e}", result.address_queried);
                    self.balance = None;
                    self.state = FetchState::Errored;
                }
            },
            Err(report) => {
                warn!("error fetching balance: {report:?}");
                self.balance = None;
                self.state = FetchState::Errored;
            }
        }
    }

    pub fn toggle_display_mode(&mut self) {
        self.display_fiat = !self.display_fiat;
    }

    pub fn display_fiat(&self) -> bool {
        self.display_fiat
    }

    /// Derives the display value from the current state and the externally
    /// owned price slice.
    pub fn render(&self, price: NativeCurrencyState, currency_symbol: &str) -> BalanceDisplay {
        if self.state == FetchState::Errored {
            return BalanceDisplay::Error;
        }
        let Some(balance) = self.balance else {
            return BalanceDisplay::Placeholder;
        };
        if price.is_fetching && price.price == 0.0 {
            return BalanceDisplay::Placeholder;
        }

        if self.display_fiat {
            BalanceDisplay::Value(format_fiat(balance, price.price))
        } else {
            BalanceDisplay::Value(format_native(balance, currency_symbol))
        }
    }
}

/// Runs one fetch cycle for `request` and applies the outcome to the view.
/// The generation guard inside `response_received` drops the outcome when a
/// newer address change superseded this request mid-flight.
pub async fn run_fetch(
    view: &Mutex<BalanceView>,
    explorer: &dyn BlockExplorer,
    request: FetchRequest,
) {
    let outcome = explorer.fetch_native_balance(&request.address).await;
    view.lock().await.response_received(request.generation, outcome);
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use error_stack::Report;

    use crate::explorer::ExplorerError;

    use super::*;

    fn ok_result(address: &str, raw: &str) -> ExplorerResult<BalanceQueryResult> {
        Ok(BalanceQueryResult {
            address_queried: address.to_string(),
            raw_balance_smallest_unit: raw.to_string(),
            fetched_at: Utc::now(),
        })
    }

    #[test]
    fn test_starts_idle_and_renders_placeholder() {
        let view = BalanceView::new(None);
        assert_eq!(view.state(), FetchState::Idle);
        assert_eq!(
            view.render(NativeCurrencyState::default(), "KPG"),
            BalanceDisplay::Placeholder
        );
    }

    #[test]
    fn test_address_change_enters_loading() {
        let mut view = BalanceView::new(None);
        let request = view.address_changed(Some("0xabc".into())).unwrap();
        assert_eq!(view.state(), FetchState::Loading);
        assert_eq!(request.address, "0xabc");
        assert_eq!(
            view.render(NativeCurrencyState::default(), "KPG"),
            BalanceDisplay::Placeholder
        );
    }

    #[test]
    fn test_cleared_address_parks_at_idle() {
        let mut view = BalanceView::new(None);
        view.address_changed(Some("0xabc".into()));
        assert!(view.address_changed(None).is_none());
        assert_eq!(view.state(), FetchState::Idle);
    }

    #[test]
    fn test_successful_response_loads_balance() {
        let mut view = BalanceView::new(None);
        let request = view.address_changed(Some("0xabc".into())).unwrap();
        view.response_received(request.generation, ok_result("0xabc", "1000000000000000000"));

        assert_eq!(view.state(), FetchState::Loaded);
        assert_eq!(view.balance(), Some(1.0));
        let price = NativeCurrencyState {
            price: 3.0,
            is_fetching: false,
        };
        assert_eq!(
            view.render(price, "KPG"),
            BalanceDisplay::Value("1.0000 KPG".into())
        );
    }

    #[test]
    fn test_error_response_enters_errored() {
        let mut view = BalanceView::new(None);
        let request = view.address_changed(Some("0xabc".into())).unwrap();
        view.response_received(
            request.generation,
            Err(Report::new(ExplorerError::UpstreamStatus(503))),
        );

        assert_eq!(view.state(), FetchState::Errored);
        assert_eq!(view.balance(), None);
        assert_eq!(
            view.render(NativeCurrencyState::default(), "KPG"),
            BalanceDisplay::Error
        );
    }

    #[test]
    fn test_malformed_balance_enters_errored() {
        let mut view = BalanceView::new(None);
        let request = view.address_changed(Some("0xabc".into())).unwrap();
        view.response_received(request.generation, ok_result("0xabc", "not-a-number"));

        assert_eq!(view.state(), FetchState::Errored);
        assert_eq!(view.balance(), None);
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut view = BalanceView::new(None);
        let first = view.address_changed(Some("0xold".into())).unwrap();
        let second = view.address_changed(Some("0xnew".into())).unwrap();

        view.response_received(first.generation, ok_result("0xold", "9000000000000000000"));
        assert_eq!(view.state(), FetchState::Loading);
        assert_eq!(view.balance(), None);

        view.response_received(second.generation, ok_result("0xnew", "2500000000000000000"));
        assert_eq!(view.state(), FetchState::Loaded);
        assert_eq!(view.balance(), Some(2.5));
    }

    #[test]
    fn test_toggle_switches_fiat_display() {
        let mut view = BalanceView::new(None);
        let request = view.address_changed(Some("0xabc".into())).unwrap();
        view.response_received(request.generation, ok_result("0xabc", "2500000000000000000"));

        let price = NativeCurrencyState {
            price: 3.0,
            is_fetching: false,
        };
        assert_eq!(
            view.render(price, "KPG"),
            BalanceDisplay::Value("2.5000 KPG".into())
        );
        view.toggle_display_mode();
        assert_eq!(view.render(price, "KPG"), BalanceDisplay::Value("$7.50".into()));
    }

    #[test]
    fn test_default_fiat_mode_from_constructor() {
        let view = BalanceView::new(Some(true));
        assert!(view.display_fiat());
    }

    #[test]
    fn test_placeholder_while_price_is_fetching_and_zero() {
        let mut view = BalanceView::new(None);
        let request = view.address_changed(Some("0xabc".into())).unwrap();
        view.response_received(request.generation, ok_result("0xabc", "1000000000000000000"));

        let fetching = NativeCurrencyState {
            price: 0.0,
            is_fetching: true,
        };
        assert_eq!(view.render(fetching, "KPG"), BalanceDisplay::Placeholder);

        let fetching_with_price = NativeCurrencyState {
            price: 2.0,
            is_fetching: true,
        };
        assert_eq!(
            view.render(fetching_with_price, "KPG"),
            BalanceDisplay::Value("1.0000 KPG".into())
        );
    }
}
