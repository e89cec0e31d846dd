//! Logging and tracing setup for Parking Core.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber.
///
/// RUST_LOG wins over `logging.filter` when set. Output is JSON lines unless
/// `logging.json` is off, which is handier at a terminal.
pub fn init(config: &LoggingConfig) {
    let filter = filter(config);

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// RUST_LOG, then the configured directives, then `parking_core=info`.
fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|e| {
            eprintln!("Invalid log filter {:?} ({e}), using parking_core=info", config.filter);
            EnvFilter::new("parking_core=info")
        })
}

/// Initialize tracing for tests (human-readable format, no JSON).
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("parking_core=debug")
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_is_used() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let config = LoggingConfig {
            json: false,
            filter: "parking_core=debug".to_string(),
        };
        assert_eq!(filter(&config).to_string(), "parking_core=debug");
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        let config = LoggingConfig {
            json: true,
            filter: "parking_core=not_a_level".to_string(),
        };
        assert_eq!(filter(&config).to_string(), "parking_core=info");
    }
}
