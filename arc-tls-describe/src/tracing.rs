#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Log subscriber setup for binaries that embed this crate.
//!
//! The library itself only emits events: unregistered identifiers at
//! `DEBUG`, encoder calls at `TRACE`, and registry inconsistencies at `WARN`.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Default level when `RUST_LOG` is not set
    pub log_level: Level,
    /// Include event targets in output
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self { log_level: Level::INFO, with_target: true }
    }
}

impl TracingConfig {
    /// Enable debug logging
    #[must_use]
    pub fn debug() -> Self {
        Self { log_level: Level::DEBUG, ..Default::default() }
    }

    /// Enable trace logging
    #[must_use]
    pub fn trace() -> Self {
        Self { log_level: Level::TRACE, ..Default::default() }
    }
}

/// Install a global fmt subscriber filtered by `RUST_LOG`, falling back to
/// `config.log_level`.
///
/// Returns `false` if a global subscriber was already installed.
///
/// # Example
/// ```no_run
/// use arc_tls_describe::tracing::{TracingConfig, init_tracing};
///
/// init_tracing(&TracingConfig::debug());
/// ```
pub fn init_tracing(config: &TracingConfig) -> bool {
    let filter =
        EnvFilter::builder().with_default_directive(config.log_level.into()).from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(config.with_target))
        .with(filter)
        .try_init()
        .is_ok()
}
