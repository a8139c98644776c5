use std::sync::RwLock;

use thiserror::Error;
use tracing::warn;

use crate::network::chain::ChainDescriptor;

/// Fiat price of the native currency, fed by the price routine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NativeCurrencyState {
    pub price: f64,
    pub is_fetching: bool,
}

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("shared state lock poisoned: {0}")]
    LockPoisoned(&'static str),
}

/// Shared application state, passed explicitly instead of living in a
/// global store.
///
/// Write ownership: `target_network` is written only by the network
/// binding; `native_currency` only by the price routine. Everything else
/// reads.
#[derive(Debug, Default)]
pub struct AppContext {
    target_network: RwLock<Option<ChainDescriptor>>,
    native_currency: RwLock<NativeCurrencyState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_network(&self) -> Option<ChainDescriptor> {
        match self.target_network.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => {
                warn!("target network lock poisoned, reading the last value anyway");
                poisoned.into_inner().clone()
            }
        }
    }

    pub fn set_target_network(&self, chain: ChainDescriptor) -> Result<(), ContextError> {
        let mut guard = self
            .target_network
            .write()
            .map_err(|_| ContextError::LockPoisoned("target_network"))?;
        *guard = Some(chain);
        Ok(())
    }

    pub fn native_currency(&self) -> NativeCurrencyState {
        match self.native_currency.read() {
            Ok(guard) => *guard,
            Err(poisoned) => {
                warn!("native currency lock poisoned, reading the last value anyway");
                *poisoned.into_inner()
            }
        }
    }

    pub fn set_native_currency_price(&self, price: f64) -> Result<(), ContextError> {
        let mut guard = self
            .native_currency
            .write()
            .map_err(|_| ContextError::LockPoisoned("native_currency"))?;
        guard.price = price;
        Ok(())
    }

    pub fn set_native_currency_fetching(&self, is_fetching: bool) -> Result<(), ContextError> {
        let mut guard = self
            .native_currency
            .write()
            .map_err(|_| ContextError::LockPoisoned("native_currency"))?;
        guard.is_fetching = is_fetching;
        Ok(())
    }
}
