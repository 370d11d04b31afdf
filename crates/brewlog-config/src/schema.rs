//! Configuration schema definitions using serde.

use brewlog_common::{BrewLogError, LoggingConfig, TimeWindow};
use brewlog_i18n::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for Brewlog.
///
/// Every section and field is optional in files; missing values take their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Statistics configuration.
    pub stats: StatsConfig,
    /// Report display configuration.
    pub display: DisplayConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Statistics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsConfig {
    /// Window used when none is given on the command line.
    pub default_window: TimeWindow,
    /// Number of tags in the top-tags ranking.
    pub top_tags_limit: usize,
    /// Number of entries listed as recent.
    pub recent_limit: usize,
}

/// Report display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Locale for labels and dates.
    pub locale: Locale,
    /// Output format.
    pub format: OutputFormat,
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = BrewLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(BrewLogError::parse(format!(
                "Unknown output format '{other}', expected text or json"
            ))),
        }
    }
}

/// Log line layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default multi-field lines.
    #[default]
    Plain,
    /// Compact single lines.
    Compact,
    /// Multi-line pretty output.
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Level or filter directives, e.g. `info` or `brewlog_stats=debug`.
    pub level: String,
    /// Line layout.
    pub format: LogFormat,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
    /// Log span open and close events.
    pub include_spans: bool,
    /// Include the event target in each line.
    pub include_targets: bool,
}

impl From<&LoggingSettings> for LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            json_format: settings.format == LogFormat::Compact,
            pretty_format: settings.format == LogFormat::Pretty,
            file_path: settings
                .file
                .as_ref()
                .map(|path| path.to_string_lossy().into_owned()),
            include_spans: settings.include_spans,
            include_targets: settings.include_targets,
        }
    }
}
