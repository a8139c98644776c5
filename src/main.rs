use std::sync::Arc;
use std::time::Duration;

use chain_gateway::config::app_config::CONFIG;
use chain_gateway::context::AppContext;
use chain_gateway::network::binding::ensure_target_network;
use chain_gateway::price::coingecko::CoinGeckoApi;
use chain_gateway::price::routine::PriceRoutine;
use chain_gateway::rpc::forwarder::RpcForwarder;
use chain_gateway::rpc::routes::{create_router, AppState};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("chain_gateway=info,tower_http=info")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let context = Arc::new(AppContext::new());

    let target_network = ensure_target_network(&context);
    info!(
        chain_id = target_network.id,
        chain = target_network.name,
        "target network bound"
    );

    let price_routine = PriceRoutine::new(
        CoinGeckoApi::default(),
        Arc::clone(&context),
        CONFIG.price.coingecko_token_id.to_string(),
        Duration::from_secs(CONFIG.price.refresh_interval_secs),
    );
    tokio::spawn(async move { price_routine.run().await });

    let state = Arc::new(AppState {
        forwarder: RpcForwarder::new(target_network.rpc_base_url),
    });
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&*CONFIG.server.bind_address).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;

    Ok(())
}
