//! Tracing setup: env-filtered, bunyan-formatted JSON lines on stdout.

use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::Config;
use crate::error::AppError;

/// Installs the global subscriber. `RUST_LOG` wins when set; otherwise the
/// debug flag picks the default filter level.
pub fn init(config: &Config) -> Result<(), AppError> {
    let default_filter = if config.debug {
        "sona_core=debug,info"
    } else {
        "info"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let formatting_layer = BunyanFormattingLayer::new(crate::api::SERVICE_NAME.into(), std::io::stdout);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber).map_err(|e| AppError::Internal(e.to_string()))
}
