//! Logging setup.
//!
//! Logs go to stderr so stdout carries only the URL list or download
//! progress.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,blogger_linked_images=debug"
    } else {
        "warn,blogger_linked_images=info"
    }
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this more than once
/// is harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert!(default_filter(true).ends_with("=debug"));
        assert!(default_filter(false).ends_with("=info"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
    }
}
