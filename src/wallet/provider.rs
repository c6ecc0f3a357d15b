//! Wallet-backed provider construction.
//!
//! # Security
//! - The mnemonic is held in memory for the process lifetime only
//! - It is never logged or serialized
//!
//! # Design Decisions
//! - Key derivation is delegated entirely to alloy's local signer; this
//!   module only binds a phrase to a fixed RPC endpoint
//! - Derivation is lazy: profiles without a mnemonic resolve fine and only
//!   fail when a signer is actually requested

use std::fmt;

use alloy::primitives::Address;
use alloy::signers::local::coins_bip39::English;
use alloy::signers::local::{MnemonicBuilder, PrivateKeySigner};
use url::Url;

use crate::config::schema::ProviderConfig;
use crate::wallet::types::{WalletError, WalletResult};

/// A mnemonic-backed signing provider bound to a fixed RPC endpoint.
#[derive(Clone)]
pub struct WalletProvider {
    /// Seed phrase for key derivation.
    mnemonic: String,
    /// Endpoint transactions are sent through.
    rpc_url: Url,
    /// Account index on the derivation path.
    address_index: u32,
}

impl WalletProvider {
    /// Create a provider from a phrase and endpoint, using the first
    /// derived account.
    pub fn new(mnemonic: impl Into<String>, rpc_url: Url) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            rpc_url,
            address_index: 0,
        }
    }

    /// Build a provider from resolved configuration.
    ///
    /// The mnemonic is taken verbatim from the config; an empty one is
    /// allowed here and only rejected when a signer is requested.
    pub fn from_config(config: &ProviderConfig) -> WalletResult<Self> {
        let rpc_url = config
            .rpc_url
            .parse()
            .map_err(|e: url::ParseError| WalletError::InvalidRpcUrl {
                url: config.rpc_url.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            mnemonic: config.mnemonic.clone(),
            rpc_url,
            address_index: config.address_index,
        })
    }

    /// The seed phrase this provider derives keys from.
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// The RPC endpoint this provider is bound to.
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// The account index on the derivation path.
    pub fn address_index(&self) -> u32 {
        self.address_index
    }

    /// Derive the signer for the configured account.
    pub fn signer(&self) -> WalletResult<PrivateKeySigner> {
        if self.mnemonic.is_empty() {
            return Err(WalletError::MissingMnemonic {
                rpc_url: self.rpc_url.to_string(),
            });
        }

        let signer = MnemonicBuilder::<English>::default()
            .phrase(self.mnemonic.as_str())
            .index(self.address_index)
            .map_err(|e| WalletError::Derivation(e.to_string()))?
            .build()
            .map_err(|e| WalletError::Derivation(e.to_string()))?;

        tracing::debug!(
            address = %signer.address(),
            rpc_url = %self.rpc_url,
            "wallet signer derived"
        );
        Ok(signer)
    }

    /// Address of the configured account.
    pub fn address(&self) -> WalletResult<Address> {
        Ok(self.signer()?.address())
    }
}

// The mnemonic must never reach logs or debug dumps.
impl fmt::Debug for WalletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletProvider")
            .field("mnemonic", &"<redacted>")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("address_index", &self.address_index)
            .finish()
    }
}
