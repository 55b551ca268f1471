//! Diagnostic logging setup.

use std::io;

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber whose level follows the `-v` count.
///
/// `RUST_LOG`, when set, takes precedence over the flag.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("warning: could not initialize logging: {e}");
    }
}
