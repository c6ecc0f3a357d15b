//! Wallet error definitions.

use thiserror::Error;

/// Errors that can occur while building a wallet-backed provider.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The profile needs a wallet but no mnemonic was loaded.
    #[error("no mnemonic available for provider at {rpc_url}; add one to secrets.json")]
    MissingMnemonic {
        /// Endpoint the provider is bound to.
        rpc_url: String,
    },

    /// The configured RPC endpoint is not a parseable URL.
    #[error("invalid RPC URL '{url}': {reason}")]
    InvalidRpcUrl {
        /// Offending URL.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// Key derivation from the mnemonic failed.
    #[error("key derivation failed: {0}")]
    Derivation(String),
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;
