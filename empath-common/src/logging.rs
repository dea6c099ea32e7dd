use std::str::FromStr;

use tracing::metadata::LevelFilter;
use tracing_subscriber::{
    Layer, Registry, filter::FilterFn, fmt::time::ChronoUtc,
    prelude::__tracing_subscriber_SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::{LogConfig, LogFormat};

/// Environment variable that overrides the configured level.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

const fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    }
}

/// Resolve the level to log at from an optional textual level.
///
/// Unknown levels fall back to the build default (`TRACE` for debug builds,
/// `INFO` otherwise).
pub fn level_from(requested: Option<&str>) -> LevelFilter {
    let default = default_level();

    requested.map_or(default, |level| {
        LevelFilter::from_str(level).unwrap_or_else(|_| {
            eprintln!("Invalid log level specified {level}, defaulting to {default}");
            default
        })
    })
}

fn resolve_level(config: &LogConfig) -> LevelFilter {
    let from_env = std::env::var(LOG_LEVEL_VAR).ok();
    level_from(from_env.as_deref().or(config.level.as_deref()))
}

/// Install the global subscriber described by `config`.
///
/// # Errors
/// If a global subscriber has already been installed
pub fn try_init(config: &LogConfig) -> Result<(), TryInitError> {
    let level = resolve_level(config);

    let layer = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_ansi(config.ansi)
        .with_timer(ChronoUtc::rfc_3339());

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    Registry::default()
        .with(
            layer
                .with_filter(level)
                .with_filter(FilterFn::new(|metadata| {
                    metadata.target().starts_with("empath")
                })),
        )
        .try_init()
}

/// Install the global subscriber described by `config`.
///
/// # Panics
/// If a global subscriber has already been installed
pub fn init(config: &LogConfig) {
    if let Err(err) = try_init(config) {
        panic!("Unable to initialise logging: {err}");
    }
}
