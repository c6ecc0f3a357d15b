//! Built-in network profiles.
//!
//! These are the fixed environments the toolchain knows out of the box. An
//! override file replaces the whole set; it does not merge.

use std::collections::BTreeMap;

use crate::config::schema::{NetworkProfile, ProviderConfig};

/// Local development node on the default RPC port.
pub fn development() -> NetworkProfile {
    NetworkProfile {
        host: Some("127.0.0.1".to_string()),
        port: Some(8545),
        network_id: "*".to_string(),
        gas: None,
        gas_price: None,
        provider: None,
    }
}

/// Compose network: the node is reachable by service name.
pub fn docker() -> NetworkProfile {
    NetworkProfile {
        host: Some("eth-node".to_string()),
        port: Some(8545),
        network_id: "*".to_string(),
        gas: Some(4_600_000),
        gas_price: Some(21_000_000_000),
        provider: None,
    }
}

/// Shared development cluster, reached through a wallet-backed provider.
pub fn k8sdev() -> NetworkProfile {
    NetworkProfile {
        host: None,
        port: Some(8545),
        network_id: "224895".to_string(),
        gas: Some(4_600_000),
        gas_price: None,
        provider: Some(ProviderConfig::new("http://35.231.60.112:8545")),
    }
}

/// Rinkeby public testnet via Infura.
pub fn rinkeby() -> NetworkProfile {
    NetworkProfile {
        host: None,
        port: None,
        network_id: "4".to_string(),
        gas: Some(4_500_000),
        gas_price: Some(21_000_000_000),
        provider: Some(ProviderConfig::new("https://rinkeby.infura.io")),
    }
}

/// All built-in profiles keyed by name.
pub fn builtin_networks() -> BTreeMap<String, NetworkProfile> {
    BTreeMap::from([
        ("development".to_string(), development()),
        ("docker".to_string(), docker()),
        ("k8sdev".to_string(), k8sdev()),
        ("rinkeby".to_string(), rinkeby()),
    ])
}
