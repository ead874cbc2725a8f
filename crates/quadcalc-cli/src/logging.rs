//! Diagnostic logging setup

use crate::config::Verbosity;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the log filter for `verbosity`; `RUST_LOG` wins when set
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| verbosity.filter_directive().into())
}

/// Install the stderr subscriber
///
/// Stdout carries calculator output, so diagnostics go to stderr. Calling
/// this twice is a no-op.
pub fn init(verbosity: Verbosity, use_color: bool) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_color)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
