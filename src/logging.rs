//! Log output for the command-line front-end
//!
//! Library code only emits `tracing` events; the binary decides where they go.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given `-v` count
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flag. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
