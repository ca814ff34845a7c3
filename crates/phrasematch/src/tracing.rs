//! Logging setup for the phrasematch CLI.
//!
//! Logs go to stderr; stdout carries nothing but match results.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber, honouring `RUST_LOG` and falling back to
/// `default_filter` when it is unset or invalid.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_with_filter(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok()
}

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// [`init_with_filter`] with [`DEFAULT_FILTER`]
pub fn init() -> bool {
    init_with_filter(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_filter_shows_run_summaries() {
        let filter = EnvFilter::new(DEFAULT_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
