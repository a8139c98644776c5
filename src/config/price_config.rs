#[derive(serde::Deserialize, Debug, Clone)]
pub struct PriceConfig {
    pub coingecko_token_id: Box<str>,
    pub refresh_interval_secs: u64,
}
