//! Subscriber installation.

use std::sync::Once;

/// Filter variable, e.g. `MONKEY_LOG=monkey_eval=debug`.
pub const LOG_ENV_VAR: &str = "MONKEY_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber if `MONKEY_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var_os(LOG_ENV_VAR).is_none() {
            return;
        }
        let filter = EnvFilter::from_env(LOG_ENV_VAR);
        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_targets(true)
            .with_writer(std::io::stderr);
        // Another subscriber may already be set by an embedding host.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}
