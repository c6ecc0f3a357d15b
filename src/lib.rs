//! Toolchain configuration for mainchain contract deployments.
//!
//! Resolves the network profiles, compiler settings, and wallet-backed
//! providers the contract build tool runs against. The mnemonic for remote
//! networks comes from an optional local `secrets.json`; everything else is
//! fixed at load time.

pub mod config;
pub mod observability;
pub mod wallet;

pub use config::schema::ToolchainConfig;
pub use wallet::WalletProvider;
