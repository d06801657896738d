//! Diagnostics via `tracing`.
//!
//! `RUST_LOG` wins when set (e.g. `RUST_LOG=rtimesheet=trace`); otherwise
//! the level is `warn`, or `debug` with `--verbose`.

use tracing_subscriber::{EnvFilter, fmt};

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: una seconda chiamata (test) non deve andare in panic
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Test setup with a verbose filter and the test writer
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
