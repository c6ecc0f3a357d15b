//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ToolchainConfig;
use crate::config::secrets::{self, SecretsError};
use crate::config::validation::{validate_config, ValidationError};

/// Optional override file probed in the project root.
pub const CONFIG_FILE: &str = "toolchain.toml";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the expected schema.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The config parsed but failed semantic validation.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// The secrets file was present but unusable.
    #[error(transparent)]
    Secrets(#[from] SecretsError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read and deserialize a config file, without semantic validation.
fn read_config(path: &Path) -> Result<ToolchainConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ToolchainConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

impl ToolchainConfig {
    /// Resolve the configuration for a project root.
    ///
    /// Reads `toolchain.toml` if present (built-in profiles otherwise),
    /// loads the optional secrets file, and injects the mnemonic into every
    /// wallet-backed profile. The result is a pure function of the files'
    /// contents: repeated calls yield an identical configuration.
    pub fn resolve(root: &Path) -> Result<Self, ConfigError> {
        let override_path = root.join(CONFIG_FILE);
        let mut config = if override_path.exists() {
            tracing::info!(path = ?override_path, "loading configuration override");
            read_config(&override_path)?
        } else {
            Self::default()
        };

        let secrets = secrets::load(root)?;
        for profile in config.networks.values_mut() {
            if let Some(provider) = profile.provider.as_mut() {
                provider.mnemonic = secrets.mnemonic.clone();
            }
        }

        validate_config(&config).map_err(ConfigError::Validation)?;

        tracing::info!(
            networks = config.networks.len(),
            compiler = %config.compiler.version,
            "configuration resolved"
        );
        Ok(config)
    }
}
