// logging.rs — Diagnostic logging setup
//
// Diagnostics go to stderr so stdout only ever carries the listing line.
// Verbosity follows RUST_LOG; the default shows warnings only.

use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
