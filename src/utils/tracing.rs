use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::APP_CONFIG;

/// Install the global subscriber. `RUST_LOG` wins over `LOG_LEVEL` when both are set.
pub fn init_standard_tracing(crate_name: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{crate_name}={level},tower_http={level}",
            level = APP_CONFIG.log_level
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
