//! Structured logging infrastructure for Brewlog

use crate::{BrewLogError, Result};
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "brewlog_stats=trace")
    pub level: String,
    /// Whether to use the compact single-line format
    pub json_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Optional file path for log output; console logs go to stderr otherwise
    pub file_path: Option<String>,
    /// Whether to include span open/close events in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the level filter. `RUST_LOG` wins over the configured level.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

fn open_log_file(path: &str) -> Result<Mutex<std::fs::File>> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BrewLogError::config_with_source(format!("Cannot open log file '{path}'"), e))?;
    Ok(Mutex::new(file))
}

fn installed(result: std::result::Result<(), tracing_subscriber::util::TryInitError>) -> Result<()> {
    result.map_err(|e| with_context!(e, "Failed to install tracing subscriber"))
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());
    let span_events = config.span_events();

    if config.json_format {
        let layer = fmt::layer()
            .compact()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match config.file_path.as_deref() {
            Some(path) => {
                let writer = open_log_file(path)?;
                installed(registry.with(layer.with_ansi(false).with_writer(writer)).try_init())
            }
            None => installed(registry.with(layer.with_writer(std::io::stderr)).try_init()),
        }
    } else if config.pretty_format {
        let layer = fmt::layer()
            .pretty()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match config.file_path.as_deref() {
            Some(path) => {
                let writer = open_log_file(path)?;
                installed(registry.with(layer.with_ansi(false).with_writer(writer)).try_init())
            }
            None => installed(registry.with(layer.with_writer(std::io::stderr)).try_init()),
        }
    } else {
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_target(config.include_targets);

        match config.file_path.as_deref() {
            Some(path) => {
                let writer = open_log_file(path)?;
                installed(registry.with(layer.with_ansi(false).with_writer(writer)).try_init())
            }
            None => installed(registry.with(layer.with_writer(std::io::stderr)).try_init()),
        }
    }
}
