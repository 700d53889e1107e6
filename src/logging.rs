use std::sync::Once;

use crate::config;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with `al_income=info` plus the
/// configured filter. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        let mut rejected = Vec::new();
        let directives = std::iter::once("al_income=info").chain(config().log_filter.as_deref());
        for directive in directives {
            match directive.parse() {
                Ok(parsed) => filter = filter.add_directive(parsed),
                Err(_) => rejected.push(directive),
            }
        }

        // Another subscriber may already be installed by the host.
        if fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::info!("al-income tracing initialized.");
        }
        for directive in rejected {
            tracing::warn!(directive, "ignoring invalid log filter");
        }
    });
}
