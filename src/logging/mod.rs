//! Tracing subscriber setup for the scanner binary.
//!
//! Production emits JSON lines; every other environment gets coloured
//! human-readable output. `RUST_LOG` overrides the default `info` filter.

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging() {
    init_logging_for(&get_environment());
}

/// Install the global subscriber for `environment`. A second call is a no-op.
pub fn init_logging_for(environment: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if matches!(environment, "production" | "prod") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(std::io::stdout),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .try_init()
    };

    if installed.is_err() {
        tracing::debug!("logging already initialised");
    }
}
