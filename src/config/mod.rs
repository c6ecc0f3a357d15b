//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! toolchain.toml (optional)
//!     → loader.rs (parse & deserialize, built-in profiles otherwise)
//! secrets.json (optional)
//!     → secrets.rs (mnemonic, empty string when absent)
//!     → loader.rs (inject mnemonic into wallet-backed profiles)
//!     → validation.rs (semantic checks)
//!     → ToolchainConfig (validated, immutable)
//!     → consumed by the build tool / CLI
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; it is read exactly once at startup
//! - All fields have defaults so the built-in profiles work with no files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod profiles;
pub mod schema;
pub mod secrets;
pub mod validation;

pub use loader::load_config;
pub use schema::CompilerConfig;
pub use schema::NetworkProfile;
pub use schema::ProviderConfig;
pub use schema::ToolchainConfig;
