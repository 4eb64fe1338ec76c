//! Tracing setup

use rental_app::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing to stderr so stdout carries only the quote
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::new(config.log_filter());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
