use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde_json::{json, Value};

use super::chain::ChainDescriptor;

pub static MANDALA: LazyLock<ChainDescriptor> = LazyLock::new(|| ChainDescriptor {
    id: 4818,
    name: "Mandala Paseo",
    native_currency_symbol: "KPG",
    rpc_base_url: "https://rpc2.paseo.mandalachain.io",
    explorer_base_url: "https://explorer.paseo.mandalachain.io",
    extra_attributes: BTreeMap::new(),
});

/// Chains the application can bind to. Only one is supported; the binding
/// always picks the first entry.
pub static TARGET_NETWORKS: LazyLock<Vec<&'static ChainDescriptor>> = LazyLock::new(|| {
    vec![
        &MANDALA, //
    ]
});

/// Per-chain-id extension attributes applied when binding the target network.
pub static NETWORKS_EXTRA_DATA: LazyLock<HashMap<u64, BTreeMap<String, Value>>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();
        map.insert(
            MANDALA.id,
            BTreeMap::from([("color".to_string(), json!("#7c3aed"))]),
        );
        map
    });
