pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod pricing;
pub mod search;
pub mod server;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// Note: This function can only be called once. The serve command uses
/// [`init_tracing_with`] instead so the configured level and format apply.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// Initialize tracing/logging from server configuration
///
/// `RUST_LOG` still wins over the configured level when set, so ad-hoc
/// debugging does not require editing config.toml.
pub fn init_tracing_with(server: &config::ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(server.log_level.clone()));

    let registry = tracing_subscriber::registry().with(filter);
    if server.log_format == "json" {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
