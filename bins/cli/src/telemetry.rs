//! Tracing subscriber setup.

use monotax_shared::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Events go to stderr so stdout carries
/// only the report.
///
/// `RUST_LOG` wins over `verbose`, which wins over the configured filter.
pub fn init_tracing(logging: &LoggingConfig, verbose: u8) {
    let fallback = match verbose {
        0 => logging.filter.clone(),
        1 => "monotax=debug".to_string(),
        _ => "trace".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
