//! Logging setup built on `tracing-subscriber`.
//!
//! The subscriber is only compiled in with the `telemetry` feature; library
//! crates log through `tracing` macros and leave installation to the binary.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[cfg(feature = "telemetry")]
use crate::RosterError;
use crate::RosterResult;
use serde::{Deserialize, Serialize};

/// Telemetry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Filter directives used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json_logs: bool,
}

fn default_log_filter() -> String {
    "info,roster=debug".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json_logs: false,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_filter`. Log lines go to
/// stderr so stdout carries only program output. Fails if a global
/// subscriber is already installed or the filter does not parse.
#[cfg(feature = "telemetry")]
pub fn init_logging(config: &TelemetryConfig) -> RosterResult<()> {
    let filter = build_filter(std::env::var("RUST_LOG").ok(), &config.log_filter)?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| RosterError::internal(format!("Failed to install subscriber: {}", e)))?;

    tracing::debug!(json = config.json_logs, "Logging initialized");
    Ok(())
}

/// Picks `rust_log` when it parses, otherwise the configured directives.
#[cfg(feature = "telemetry")]
fn build_filter(rust_log: Option<String>, configured: &str) -> RosterResult<EnvFilter> {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(configured)
        .map_err(|e| RosterError::configuration(format!("Invalid log filter '{}': {}", configured, e)))
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_logging(_config: &TelemetryConfig) -> RosterResult<()> {
    Ok(())
}
