//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every profile is reachable (host or provider)
//! - Validate value ranges (ports, gas, optimizer runs)
//! - Validate chain id and compiler version formats
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: ToolchainConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted

use thiserror::Error;
use url::Url;

use crate::config::schema::ToolchainConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The configuration declares no networks at all.
    #[error("no network profiles are defined")]
    NoNetworks,

    /// A profile has neither a host nor a provider to reach its network.
    #[error("network '{name}' has neither a host nor a provider")]
    UnreachableProfile {
        /// Profile name.
        name: String,
    },

    /// Chain id is neither the wildcard nor a decimal number.
    #[error("network '{name}' has invalid network_id '{value}' (expected \"*\" or a decimal id)")]
    InvalidNetworkId {
        /// Profile name.
        name: String,
        /// Offending value.
        value: String,
    },

    /// Port 0 cannot be connected to.
    #[error("network '{name}' has port 0")]
    ZeroPort {
        /// Profile name.
        name: String,
    },

    /// A zero gas limit can never carry a deployment.
    #[error("network '{name}' has a zero gas limit")]
    ZeroGas {
        /// Profile name.
        name: String,
    },

    /// A zero gas price is rejected by every node.
    #[error("network '{name}' has a zero gas price")]
    ZeroGasPrice {
        /// Profile name.
        name: String,
    },

    /// Provider endpoint is not a parseable URL.
    #[error("network '{name}' has invalid provider URL '{url}': {reason}")]
    InvalidProviderUrl {
        /// Profile name.
        name: String,
        /// Offending URL.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// Provider endpoints must speak HTTP(S).
    #[error("network '{name}' has provider URL scheme '{scheme}' (expected http or https)")]
    UnsupportedProviderScheme {
        /// Profile name.
        name: String,
        /// Offending scheme.
        scheme: String,
    },

    /// Compiler version selector is not of the form "major.minor.patch".
    #[error("invalid compiler version '{value}' (expected e.g. \"0.4.24\")")]
    InvalidCompilerVersion {
        /// Offending value.
        value: String,
    },

    /// The optimizer is enabled but configured with zero runs.
    #[error("optimizer is enabled with zero runs")]
    ZeroOptimizerRuns,
}

/// Validate a configuration, collecting every semantic error.
pub fn validate_config(config: &ToolchainConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.networks.is_empty() {
        errors.push(ValidationError::NoNetworks);
    }

    for (name, profile) in &config.networks {
        if profile.host.is_none() && profile.provider.is_none() {
            errors.push(ValidationError::UnreachableProfile { name: name.clone() });
        }

        if !is_valid_network_id(&profile.network_id) {
            errors.push(ValidationError::InvalidNetworkId {
                name: name.clone(),
                value: profile.network_id.clone(),
            });
        }

        if profile.port == Some(0) {
            errors.push(ValidationError::ZeroPort { name: name.clone() });
        }
        if profile.gas == Some(0) {
            errors.push(ValidationError::ZeroGas { name: name.clone() });
        }
        if profile.gas_price == Some(0) {
            errors.push(ValidationError::ZeroGasPrice { name: name.clone() });
        }

        if let Some(provider) = &profile.provider {
            match Url::parse(&provider.rpc_url) {
                Ok(url) => {
                    let scheme = url.scheme();
                    if scheme != "http" && scheme != "https" {
                        errors.push(ValidationError::UnsupportedProviderScheme {
                            name: name.clone(),
                            scheme: scheme.to_string(),
                        });
                    }
                }
                Err(e) => {
                    errors.push(ValidationError::InvalidProviderUrl {
                        name: name.clone(),
                        url: provider.rpc_url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    if !is_valid_version(&config.compiler.version) {
        errors.push(ValidationError::InvalidCompilerVersion {
            value: config.compiler.version.clone(),
        });
    }
    if config.compiler.optimizer.enabled && config.compiler.optimizer.runs == 0 {
        errors.push(ValidationError::ZeroOptimizerRuns);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// "*" wildcard or a non-empty decimal chain id.
fn is_valid_network_id(value: &str) -> bool {
    value == "*" || (!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
}

/// Three dot-separated decimal components, e.g. "0.4.24".
fn is_valid_version(value: &str) -> bool {
    let mut components = 0;
    for part in value.split('.') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        components += 1;
    }
    components == 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{NetworkProfile, ProviderConfig};

    fn profile(host: Option<&str>) -> NetworkProfile {
        NetworkProfile {
            host: host.map(str::to_string),
            port: Some(8545),
            network_id: "*".to_string(),
            gas: None,
            gas_price: None,
            provider: None,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ToolchainConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_empty_network_set() {
        let mut config = ToolchainConfig::default();
        config.networks.clear();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NoNetworks]);
    }

    #[test]
    fn test_rejects_profile_without_endpoint() {
        let mut config = ToolchainConfig::default();
        config
            .networks
            .insert("orphan".to_string(), profile(None));
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::UnreachableProfile {
            name: "orphan".to_string()
        }));
    }

    #[test]
    fn test_rejects_bad_network_id() {
        let mut config = ToolchainConfig::default();
        let mut bad = profile(Some("127.0.0.1"));
        bad.network_id = "rinkeby".to_string();
        config.networks.insert("bad".to_string(), bad);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidNetworkId {
            name: "bad".to_string(),
            value: "rinkeby".to_string()
        }));
    }

    #[test]
    fn test_rejects_zero_valued_parameters() {
        let mut config = ToolchainConfig::default();
        let mut bad = profile(Some("127.0.0.1"));
        bad.port = Some(0);
        bad.gas = Some(0);
        bad.gas_price = Some(0);
        config.networks.insert("zeroes".to_string(), bad);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::ZeroPort {
            name: "zeroes".to_string()
        }));
        assert!(errors.contains(&ValidationError::ZeroGas {
            name: "zeroes".to_string()
        }));
        assert!(errors.contains(&ValidationError::ZeroGasPrice {
            name: "zeroes".to_string()
        }));
    }

    #[test]
    fn test_rejects_non_http_provider_url() {
        let mut config = ToolchainConfig::default();
        let mut bad = profile(None);
        bad.provider = Some(ProviderConfig::new("ws://example.org:8546"));
        config.networks.insert("ws".to_string(), bad);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::UnsupportedProviderScheme {
            name: "ws".to_string(),
            scheme: "ws".to_string()
        }));
    }

    #[test]
    fn test_rejects_unparseable_provider_url() {
        let mut config = ToolchainConfig::default();
        let mut bad = profile(None);
        bad.provider = Some(ProviderConfig::new("not a url"));
        config.networks.insert("bad-url".to_string(), bad);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidProviderUrl { name, .. } if name == "bad-url")));
    }

    #[test]
    fn test_rejects_bad_compiler_version() {
        for bad in ["", "0.4", "0.4.24.1", "v0.4.24", "0.4.x"] {
            let mut config = ToolchainConfig::default();
            config.compiler.version = bad.to_string();
            let errors = validate_config(&config).unwrap_err();
            assert!(
                errors.contains(&ValidationError::InvalidCompilerVersion {
                    value: bad.to_string()
                }),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_zero_optimizer_runs() {
        let mut config = ToolchainConfig::default();
        config.compiler.optimizer.runs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::ZeroOptimizerRuns));

        // Disabled optimizer does not care about runs.
        config.compiler.optimizer.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_multiple_errors() {
        let mut config = ToolchainConfig::default();
        config.networks.insert("orphan".to_string(), profile(None));
        config.compiler.version = "latest".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
