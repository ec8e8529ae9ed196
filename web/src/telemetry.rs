//! Tracing subscriber setup for the server binary.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `filter` uses `RUST_LOG` directive syntax. Invalid directives fall back to
/// `info` so a typo never silences the server entirely.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(filter: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
