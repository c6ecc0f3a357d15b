//! Wallet-backed provider subsystem.
//!
//! Remote network profiles carry a provider definition instead of a direct
//! host/port pair. This module turns a resolved [`ProviderConfig`] into a
//! signing provider, delegating all key derivation to alloy.
//!
//! [`ProviderConfig`]: crate::config::schema::ProviderConfig

pub mod provider;
pub mod types;

pub use provider::WalletProvider;
pub use types::{WalletError, WalletResult};
