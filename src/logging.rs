//! Tracing setup
//!
//! Log events go to stderr so they never interleave with the menu output on
//! stdout. `RUST_LOG` takes precedence over the built-in defaults.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber
///
/// Defaults to warnings only; `verbose` lowers the crate's level to debug.
/// Calling this more than once has no effect.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_directive = if verbose { "fintrack=debug" } else { "fintrack=warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
