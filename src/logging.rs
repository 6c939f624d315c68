//! Tracing setup

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, logging to stderr
///
/// `RUST_LOG` wins over `default_filter` when it is set. Calls after the
/// first are ignored, and so is an embedding application that already
/// installed its own subscriber.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let installed = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();

        match installed {
            Ok(()) => tracing::debug!("tracing initialized"),
            Err(err) => tracing::debug!(%err, "keeping the existing tracing subscriber"),
        }
    });
}
