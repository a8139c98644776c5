pub mod coingecko;
pub mod routine;
