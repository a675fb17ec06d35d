//! Diagnostic tracing for debugging path conversion and runner launches.
//!
//! Operator-facing progress (`[validate] ...`) is printed by
//! `reporting::console` on stdout and is not affected by this module.
//! Tracing output goes to stderr and is controlled by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=unity_validate=debug unity-validate suite --platform EditMode --dry-run
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Defaults to `warn` when `RUST_LOG` is unset.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
