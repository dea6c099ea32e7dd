//! Logging configuration.
//!
//! Every field has a default, so an empty section deserialises to a usable
//! configuration:
//!
//! ```ron
//! (
//!     level: Some("debug"),
//!     format: Json,
//!     ansi: false,
//! )
//! ```

use serde::{Deserialize, Serialize};

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    /// Single-line human readable output.
    #[default]
    Compact,
    /// Newline-delimited JSON objects.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level filter, e.g. `"info"` or `"trace"`.
    ///
    /// The `LOG_LEVEL` environment variable takes precedence. When neither is
    /// set, debug builds log at `TRACE` and release builds at `INFO`.
    pub level: Option<String>,

    /// Output format.
    ///
    /// Default: `Compact`
    pub format: LogFormat,

    /// Colourise output.
    ///
    /// Default: `true`
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: LogFormat::default(),
            ansi: true,
        }
    }
}
