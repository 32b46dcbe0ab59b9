//! Diagnostic output via tracing, written to stderr.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// `verbose` lifts the level from warn to debug. `RUST_LOG` still applies.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
