//! Semantic validation of a loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use std::ops::RangeInclusive;

/// Allowed top-tags limits.
pub const TOP_TAGS_RANGE: RangeInclusive<usize> = 1..=50;

/// Allowed recent-entry limits.
pub const RECENT_LIMIT_RANGE: RangeInclusive<usize> = 0..=100;

/// Level names accepted in filter directives.
pub const KNOWN_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator.
#[derive(Debug)]
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting every problem at once.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let problems = Self::problems(config);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation { problems })
        }
    }

    /// Lists every problem with a configuration.
    #[must_use]
    pub fn problems(config: &Config) -> Vec<String> {
        let mut problems = Vec::new();

        if !TOP_TAGS_RANGE.contains(&config.stats.top_tags_limit) {
            problems.push(format!(
                "stats.top_tags_limit must be between {} and {}, got {}",
                TOP_TAGS_RANGE.start(),
                TOP_TAGS_RANGE.end(),
                config.stats.top_tags_limit
            ));
        }

        if !RECENT_LIMIT_RANGE.contains(&config.stats.recent_limit) {
            problems.push(format!(
                "stats.recent_limit must be at most {}, got {}",
                RECENT_LIMIT_RANGE.end(),
                config.stats.recent_limit
            ));
        }

        if let Err(problem) = validate_level(&config.logging.level) {
            problems.push(problem);
        }

        if config
            .logging
            .file
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            problems.push("logging.file cannot be empty".to_string());
        }

        problems
    }
}

/// Checks a level or comma separated `target=level` directive list.
fn validate_level(level: &str) -> Result<(), String> {
    if level.trim().is_empty() {
        return Err("logging.level cannot be empty".to_string());
    }

    for directive in level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let name = directive.rsplit_once('=').map_or(directive, |(_, level)| level);
        if !KNOWN_LEVELS.iter().any(|known| name.eq_ignore_ascii_case(known)) {
            return Err(format!(
                "logging.level has unknown level '{name}', expected one of: {}",
                KNOWN_LEVELS.join(", ")
            ));
        }
    }
    Ok(())
}
