// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the stdout subscriber that carries the progress notices
/// (`Extracting ...`, `Created: ...`). `RUST_LOG` overrides the default
/// `info` filter; set it to `debug` to see marker offsets and byte counts.
///
/// Progress lines are plain: no timestamps, no targets. Installing twice is
/// a no-op, so tests and callers that already set a subscriber are unaffected.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Progress logging ready.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_does_not_panic() {
        setup_logging();
        setup_logging();
        tracing::info!("Extracting test...");
    }
}
