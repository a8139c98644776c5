use std::collections::BTreeMap;

use serde_json::Value;

/// Static metadata identifying a supported network.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainDescriptor {
    pub id: u64,
    pub name: &'static str,
    pub native_currency_symbol: &'static str,
    pub rpc_base_url: &'static str,
    pub explorer_base_url: &'static str,
    pub extra_attributes: BTreeMap<String, Value>,
}

impl ChainDescriptor {
    /// Extension entries override existing attributes on key collision.
    pub fn merged_with(&self, extra: &BTreeMap<String, Value>) -> ChainDescriptor {
        let mut merged = self.clone();
        for (key, value) in extra {
            merged.extra_attributes.insert(key.clone(), value.clone());
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor() -> ChainDescriptor {
        ChainDescriptor {
            id: 1,
            name: "Testnet",
            native_currency_symbol: "TST",
            rpc_base_url: "https://rpc.test",
            explorer_base_url: "https://explorer.test",
            extra_attributes: BTreeMap::from([("color".to_string(), json!("#000000"))]),
        }
    }

    #[test]
    fn test_merge_adds_new_attributes() {
        let extra = BTreeMap::from([("icon".to_string(), json!("test.svg"))]);
        let merged = descriptor().merged_with(&extra);
        assert_eq!(merged.extra_attributes["color"], json!("#000000"));
        assert_eq!(merged.extra_attributes["icon"], json!("test.svg"));
    }

    #[test]
    fn test_merge_extension_wins_on_collision() {
        let extra = BTreeMap::from([("color".to_string(), json!("#ffffff"))]);
        let merged = descriptor().merged_with(&extra);
        assert_eq!(merged.extra_attributes["color"], json!("#ffffff"));
    }
}
