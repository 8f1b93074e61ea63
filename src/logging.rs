//! Logging System
//!
//! Structured logging via the `tracing` crate. The loader only emits events;
//! a host process installs a subscriber once at startup, for example with
//! [`init_logging`]. Output goes to stderr so stdout stays free for results.

use crate::error::PropertyError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full `EnvFilter` directive string.
pub const LOG_ENV: &str = "PROPFILE_LOG";

/// Environment variable overriding the output format (`text` or `json`).
pub const LOG_FORMAT_ENV: &str = "PROPFILE_LOG_FORMAT";

/// Log line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = PropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(PropertyError::Logging(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                other
            ))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// ANSI colors in text output; defaults to whether stderr is a terminal
    #[serde(default = "default_color")]
    pub color: bool,

    /// Per-target levels, e.g. `propfile::loader` -> `trace`
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_color() -> bool {
    std::io::stderr().is_terminal()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            color: default_color(),
            modules: BTreeMap::new(),
        }
    }
}

/// Install the global subscriber.
///
/// `PROPFILE_LOG` replaces the level and module directives of `config`;
/// `PROPFILE_LOG_FORMAT` replaces its format.
pub fn init_logging(config: &LoggingConfig) -> Result<(), PropertyError> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => config_filter(config)?,
    };
    let format = match std::env::var(LOG_FORMAT_ENV) {
        Ok(value) => value.parse()?,
        Err(_) => config.format,
    };

    let registry = Registry::default().with(filter);
    let installed = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| PropertyError::Logging(format!("Failed to install subscriber: {}", e)))
}

/// Base level plus one directive per configured module.
fn config_filter(config: &LoggingConfig) -> Result<EnvFilter, PropertyError> {
    let mut filter = EnvFilter::new(&config.level);
    for (target, level) in &config.modules {
        let directive: Directive = format!("{}={}", target, level).parse().map_err(|e| {
            PropertyError::Logging(format!("Invalid log directive {}={}: {}", target, level, e))
        })?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}

/// Split a `target=level` CLI argument.
pub fn parse_module_level(arg: &str) -> Result<(String, String), PropertyError> {
    match arg.split_once('=') {
        Some((target, level)) if !target.trim().is_empty() && !level.trim().is_empty() => {
            Ok((target.trim().to_string(), level.trim().to_string()))
        }
        _ => Err(PropertyError::Logging(format!(
            "Invalid module level '{}' (expected target=level)",
            arg
        ))),
    }
}
