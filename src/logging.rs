//! Diagnostic output for the `logcascade` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--verbose` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install a stderr subscriber.
///
/// Priority: RUST_LOG env var > `verbose` flag > [`DEFAULT_LOG_LEVEL`].
pub fn init(verbose: bool) {
	let filter = if std::env::var("RUST_LOG").is_ok() {
		EnvFilter::from_default_env()
	} else if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::new(DEFAULT_LOG_LEVEL)
	};

	// Ignore the error if a subscriber is already installed.
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
