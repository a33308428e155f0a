//! Diagnostic output
//!
//! Diagnostics go to stderr through `tracing`. `--verbose` lowers the default
//! level to debug; `RUST_LOG` takes precedence when set.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "implant=debug" } else { "implant=warn" }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
