//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults;
use crate::config::ObservabilityConfig;
use crate::constants;

static INIT: Once = Once::new();

/// Initialize logging with the compiled default directive.
///
/// Reads `SYLVA_LOG` for per-module log levels, e.g.
/// `SYLVA_LOG=sylva_graph::filter=debug,sylva_graph::clone=trace`.
///
/// Falls back to `sylva=info` if `SYLVA_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    install(defaults::DEFAULT_LOG_DIRECTIVE.to_string());
}

/// Initialize logging using `observability.log_level` as the fallback directive.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    install(config.directive());
}

fn install(fallback: String) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(fallback));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
