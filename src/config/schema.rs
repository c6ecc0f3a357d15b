//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure consumed by the
//! contract build tool. All types derive Serde traits for deserialization
//! from config files.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::profiles;

/// Root configuration for the contract toolchain.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Network profiles keyed by name (deterministic iteration order).
    pub networks: BTreeMap<String, NetworkProfile>,

    /// Compiler settings.
    pub compiler: CompilerConfig,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            networks: profiles::builtin_networks(),
            compiler: CompilerConfig::default(),
        }
    }
}

/// Connection parameters for a single named network.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NetworkProfile {
    /// Node hostname for direct connections (e.g., "127.0.0.1").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Node port for direct connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Chain identifier: "*" matches any chain, otherwise a decimal id.
    #[serde(default = "default_network_id")]
    pub network_id: String,

    /// Gas limit for deployment transactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,

    /// Gas price in wei. Serialized as `gasPrice`, the key the build tool
    /// expects.
    #[serde(
        rename = "gasPrice",
        alias = "gas_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub gas_price: Option<u64>,

    /// Wallet-backed provider settings for remote networks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderConfig>,
}

fn default_network_id() -> String {
    "*".to_string()
}

impl NetworkProfile {
    /// Whether this profile reaches its network through a wallet-backed
    /// provider rather than a direct host/port connection.
    pub fn is_wallet_backed(&self) -> bool {
        self.provider.is_some()
    }
}

/// Wallet-backed provider settings bound to a fixed RPC endpoint.
#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// JSON-RPC endpoint URL the provider is bound to.
    pub rpc_url: String,

    /// Account index on the mnemonic's derivation path (default: 0).
    #[serde(default)]
    pub address_index: u32,

    /// Seed phrase injected from the secrets file at resolution time.
    /// Never read from or written to config files.
    #[serde(skip)]
    pub mnemonic: String,
}

impl ProviderConfig {
    /// Create provider settings for an RPC endpoint, with no mnemonic
    /// attached yet.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            address_index: 0,
            mnemonic: String::new(),
        }
    }
}

// The mnemonic must never reach logs or debug dumps.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("rpc_url", &self.rpc_url)
            .field("address_index", &self.address_index)
            .field("mnemonic", &"<redacted>")
            .finish()
    }
}

/// Compiler settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Compiler version selector (e.g., "0.4.24").
    pub version: String,

    /// Optimizer settings.
    pub optimizer: OptimizerConfig,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            version: "0.4.24".to_string(),
            optimizer: OptimizerConfig::default(),
        }
    }
}

/// Compiler optimizer settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Enable the optimizer.
    pub enabled: bool,

    /// Optimizer runs: trades deployment cost against runtime cost.
    pub runs: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            runs: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_builtin_profiles() {
        let config = ToolchainConfig::default();
        let names: Vec<&str> = config.networks.keys().map(String::as_str).collect();
        assert_eq!(names, ["development", "docker", "k8sdev", "rinkeby"]);
        assert_eq!(config.compiler.version, "0.4.24");
        assert!(config.compiler.optimizer.enabled);
        assert_eq!(config.compiler.optimizer.runs, 200);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: ToolchainConfig = toml::from_str("").unwrap();
        assert_eq!(config, ToolchainConfig::default());
    }

    #[test]
    fn test_gas_price_uses_build_tool_key() {
        let config = ToolchainConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        let docker = &json["networks"]["docker"];
        assert_eq!(docker["gasPrice"], 21_000_000_000u64);
        assert!(docker.get("gas_price").is_none());
    }

    #[test]
    fn test_absent_fields_are_omitted_from_export() {
        let config = ToolchainConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        let development = &json["networks"]["development"];
        assert!(development.get("gas").is_none());
        assert!(development.get("provider").is_none());
        assert_eq!(development["host"], "127.0.0.1");
    }

    #[test]
    fn test_mnemonic_is_never_serialized() {
        let mut config = ToolchainConfig::default();
        if let Some(provider) = config
            .networks
            .get_mut("rinkeby")
            .and_then(|p| p.provider.as_mut())
        {
            provider.mnemonic = "leak canary".to_string();
        }
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("leak canary"));
        assert!(!json.contains("mnemonic"));
    }

    #[test]
    fn test_profile_accepts_gas_price_alias() {
        let toml = r#"
            network_id = "4"
            gas_price = 1000000000
        "#;
        let profile: NetworkProfile = toml::from_str(toml).unwrap();
        assert_eq!(profile.gas_price, Some(1_000_000_000));
    }

    #[test]
    fn test_provider_debug_redacts_mnemonic() {
        let mut provider = ProviderConfig::new("https://rinkeby.infura.io");
        provider.mnemonic = "word1 word2 word3".to_string();
        let dump = format!("{:?}", provider);
        assert!(dump.contains("<redacted>"));
        assert!(!dump.contains("word1"));
    }
}
