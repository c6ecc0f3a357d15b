//! Secrets file loading.
//!
//! # Security
//! - The mnemonic is loaded ONLY from a local, untracked secrets file
//! - It is never logged or serialized
//!
//! # Design Decisions
//! - An absent file is the normal case: local-only profiles need no wallet,
//!   so the mnemonic defaults to the empty string
//! - A present but unparseable file is a hard error that aborts startup

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File name probed in the project root.
pub const SECRETS_FILE: &str = "secrets.json";

/// Contents of the secrets file.
#[derive(Clone, PartialEq, Default, Deserialize)]
pub struct Secrets {
    /// Seed phrase for wallet-backed providers. Missing field reads as
    /// empty, same as an absent file.
    #[serde(default)]
    pub mnemonic: String,
}

// The mnemonic must never reach logs or debug dumps.
impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("mnemonic", &"<redacted>")
            .finish()
    }
}

/// Error type for secrets loading.
#[derive(Debug, Error)]
pub enum SecretsError {
    /// The secrets file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The secrets file exists but is not valid JSON.
    #[error("{} is not valid JSON: {source}", path.display())]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Load secrets from `<dir>/secrets.json`.
///
/// Returns the empty-string default when the file is absent; any other
/// failure propagates to the caller.
pub fn load(dir: &Path) -> Result<Secrets, SecretsError> {
    let path = dir.join(SECRETS_FILE);
    if !path.exists() {
        tracing::debug!(path = ?path, "no secrets file, wallet providers stay unkeyed");
        return Ok(Secrets::default());
    }

    let content = fs::read_to_string(&path).map_err(|source| SecretsError::Io {
        path: path.clone(),
        source,
    })?;
    let secrets: Secrets =
        serde_json::from_str(&content).map_err(|source| SecretsError::Parse {
            path: path.clone(),
            source,
        })?;

    tracing::info!(
        path = ?path,
        mnemonic_present = !secrets.mnemonic.is_empty(),
        "secrets file loaded"
    );
    Ok(secrets)
}
