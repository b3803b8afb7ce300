//! Tracing initialization and subscriber setup.
//!
//! Installs a `tracing-subscriber` pipeline that filters spans by the
//! configured level and writes structured records to stderr. Safe to call
//! more than once; only the first call installs a subscriber.

use crate::Settings;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// The filter directive comes from, in order:
/// 1. The `RUST_LOG` environment variable, if set
/// 2. `settings.trace_level`, if set
/// 3. `"info"`
pub fn init_tracing(settings: &Settings) {
    let fallback = settings.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
