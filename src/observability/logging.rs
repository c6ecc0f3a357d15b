//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binaries
//! - Respect `RUST_LOG` when set, fall back to caller defaults
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Secret material is never emitted; loaders log presence flags only

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_directives` applies when `RUST_LOG` is unset
/// (e.g., `"mainchain_config=info"`). Call once per process.
pub fn init_logging(default_directives: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
