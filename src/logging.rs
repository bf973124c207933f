//! Diagnostic logging.
//!
//! Off by default apart from warnings. Set `MPPASS_LOG=debug` (any
//! `EnvFilter` directive works) to see where the salt was read from.
//! Everything goes to stderr so stdout stays a single result line.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MPPASS_LOG";

pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
