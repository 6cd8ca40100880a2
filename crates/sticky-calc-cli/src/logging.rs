//! Logging setup
//!
//! Logs go to stderr so that stdout only carries calculator output.
//! `RUST_LOG` takes precedence over the `-v`/`-q` flags.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Builds the log filter for a verbosity level
#[must_use]
pub fn filter_for(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global tracing subscriber
pub fn init(verbosity: Verbosity) -> CliResult<()> {
    tracing_subscriber::registry()
        .with(filter_for(verbosity))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))?;

    tracing::debug!(?verbosity, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_reports_error() {
        // The first call may succeed or fail depending on test order,
        // but a second call in the same process never succeeds.
        let _ = init(Verbosity::Quiet);
        assert!(matches!(init(Verbosity::Quiet), Err(CliError::Logging { .. })));
    }
}
