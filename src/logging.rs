use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ClientConfig;

/// Install the global fmt subscriber. `RUST_LOG` wins over the configured level.
/// A second call leaves the first subscriber in place.
pub fn init_logging(config: &ClientConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Logging initialized with level: {}", config.log_level);
    }
}
