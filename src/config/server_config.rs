#[derive(serde::Deserialize, Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: Box<str>,
}
