//! Default values for every configuration section.

use crate::schema::{DisplayConfig, LogFormat, LoggingSettings, StatsConfig};
use brewlog_common::TimeWindow;
use brewlog_i18n::Locale;

/// Default number of tags in the ranking.
pub const DEFAULT_TOP_TAGS_LIMIT: usize = 5;

/// Default number of recent entries.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            default_window: TimeWindow::All,
            top_tags_limit: DEFAULT_TOP_TAGS_LIMIT,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Japanese,
            format: crate::OutputFormat::Text,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Plain,
            file: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Config;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.stats.default_window, brewlog_common::TimeWindow::All);
        assert_eq!(config.stats.top_tags_limit, 5);
        assert_eq!(config.stats.recent_limit, 5);
        assert_eq!(config.display.locale, brewlog_i18n::Locale::Japanese);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_defaults_match_common_logging_defaults() {
        let from_settings = brewlog_common::LoggingConfig::from(&Config::default().logging);
        assert_eq!(from_settings, brewlog_common::LoggingConfig::default());
    }
}
