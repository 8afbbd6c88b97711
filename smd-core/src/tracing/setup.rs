//! Subscriber installation for embedding applications and test binaries.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SMD_LOG";

/// Estimator crates at info, everything else off.
pub const DEFAULT_FILTER: &str = "smd_core=info,smd_estimator=info";

static INIT: Once = Once::new();

/// Build a filter from `directives`, or `DEFAULT_FILTER` when they are
/// absent or do not parse.
pub fn resolve_filter(directives: Option<&str>) -> EnvFilter {
    match directives.map(EnvFilter::try_new) {
        Some(Ok(filter)) => filter,
        Some(Err(e)) => {
            eprintln!("ignoring {LOG_ENV}: {e}; using \"{DEFAULT_FILTER}\"");
            EnvFilter::new(DEFAULT_FILTER)
        }
        None => EnvFilter::new(DEFAULT_FILTER),
    }
}

/// Install a stderr subscriber filtered by `SMD_LOG`, e.g.
/// `SMD_LOG=smd_estimator=debug`.
///
/// Only the first call does anything. A global subscriber installed by the
/// host application is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV).ok();
        let filter = resolve_filter(directives.as_deref());

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .compact(),
            )
            .with(filter)
            .try_init();
    });
}
