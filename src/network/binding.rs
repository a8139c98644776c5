use tracing::{debug, warn};

use crate::context::AppContext;

use super::chain::ChainDescriptor;
use super::registry::{NETWORKS_EXTRA_DATA, TARGET_NETWORKS};

/// Whether the shared state already held the supported chain.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingOutcome {
    Bound(ChainDescriptor),
    AlreadyBound(ChainDescriptor),
}

impl BindingOutcome {
    pub fn into_descriptor(self) -> ChainDescriptor {
        match self {
            BindingOutcome::Bound(chain) | BindingOutcome::AlreadyBound(chain) => chain,
        }
    }
}

fn configured_descriptor() -> &'static ChainDescriptor {
    TARGET_NETWORKS[0]
}

fn merged_descriptor() -> ChainDescriptor {
    let configured = configured_descriptor();
    match NETWORKS_EXTRA_DATA.get(&configured.id) {
        Some(extra) => configured.merged_with(extra),
        None => configured.clone(),
    }
}

/// Writes the registry descriptor into the shared state unless it is
/// already bound to the supported chain id. A mismatched id is rebound.
pub fn bind_target_network(ctx: &AppContext) -> BindingOutcome {
    match ctx.target_network() {
        Some(current) if current.id == configured_descriptor().id => {
            debug!(chain_id = current.id, "target network already set");
            BindingOutcome::AlreadyBound(current)
        }
        _ => {
            let merged = merged_descriptor();
            debug!(chain_id = merged.id, chain = merged.name, "binding target network");
            if let Err(e) = ctx.set_target_network(merged.clone()) {
                warn!("failed to write target network, continuing with default: {e}");
            }
            BindingOutcome::Bound(merged)
        }
    }
}

/// Ensures the shared state holds the supported chain and returns a usable
/// descriptor either way.
pub fn ensure_target_network(ctx: &AppContext) -> ChainDescriptor {
    bind_target_network(ctx).into_descriptor()
}
