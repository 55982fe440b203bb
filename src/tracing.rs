//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber. Safe to call multiple times.
///
/// Logs go to stderr so machine-readable output on stdout (e.g. `--json`)
/// stays clean. `RUST_LOG` overrides the default `info` level.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .compact()
            .try_init()
        {
            eprintln!("failed to initialize tracing: {e}");
        }
    });
}
