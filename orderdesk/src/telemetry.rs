//! Tracing subscriber setup.
//!
//! Stdout carries the JSON-RPC stream, so log lines always go to stderr.

use tracing_subscriber::EnvFilter;

use crate::{OrderDeskError, Settings};

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing(settings: &Settings) -> Result<(), OrderDeskError> {
    let filter = EnvFilter::try_new(&settings.log_filter).map_err(|err| {
        OrderDeskError::telemetry(format!(
            "invalid log filter '{}': {err}",
            settings.log_filter
        ))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|err| OrderDeskError::telemetry(err.to_string()))
}
