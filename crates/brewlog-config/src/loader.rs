//! Configuration loading utilities

use crate::schema::Config;
use crate::validator::ConfigValidator;
use brewlog_common::{BrewLogError, Result as BrewLogResult};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "BREWLOG_CONFIG_PATH";

/// File names probed in the working directory, in order.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["brewlog.toml", "brewlog.yaml", "brewlog.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither TOML nor YAML
    #[error("Unsupported configuration file '{}', expected .toml, .yaml or .yml", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {}", .problems.join("; "))]
    Validation {
        /// Every problem found.
        problems: Vec<String>,
    },
}

impl From<ConfigError> for BrewLogError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("Configuration could not be loaded", err)
    }
}

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML.
    Toml,
    /// YAML.
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Self::Yaml)
            }
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Configuration loader for the application
#[derive(Debug)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parses configuration text without applying overrides or validation.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
        Ok(match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => {
                if content.trim().is_empty() {
                    Config::default()
                } else {
                    serde_yaml::from_str(content)?
                }
            }
        })
    }

    /// Load configuration from a file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Self::load_config_with_env(path.as_ref(), |var| std::env::var(var).ok())
    }

    /// Like [`Self::load_config`], reading variables through `env`.
    pub fn load_config_with_env<F>(path: &Path, env: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content, format)?;
        debug!(path = %path.display(), ?format, "parsed configuration file");

        Self::apply_env_overrides(&mut config, &env)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from the first available source.
    ///
    /// Order: `explicit`, then `BREWLOG_CONFIG_PATH`, then the first of
    /// [`DEFAULT_CONFIG_FILES`] present in the working directory, then the
    /// defaults. Environment overrides apply in every case.
    pub fn load(explicit: Option<&Path>) -> BrewLogResult<Config> {
        Ok(Self::load_from(explicit, Path::new("."), |var| std::env::var(var).ok())?)
    }

    /// Like [`Self::load`] with an explicit search directory and environment.
    pub fn load_from<F>(explicit: Option<&Path>, search_dir: &Path, env: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidate = explicit
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(|| {
                DEFAULT_CONFIG_FILES
                    .iter()
                    .map(|name| search_dir.join(name))
                    .find(|path| path.is_file())
            });

        match candidate {
            Some(path) => {
                info!(path = %path.display(), "loading configuration");
                Self::load_config_with_env(&path, env)
            }
            None => {
                debug!("no configuration file found, using defaults");
                let mut config = Config::default();
                Self::apply_env_overrides(&mut config, &env)?;
                ConfigValidator::validate(&config)?;
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BrewLogResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply `BREWLOG_*` environment variable overrides to configuration
    pub fn apply_env_overrides<F>(config: &mut Config, env: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = env("BREWLOG_LOCALE") {
            config.display.locale = parse_var("BREWLOG_LOCALE", &locale)?;
        }

        if let Some(window) = env("BREWLOG_DEFAULT_WINDOW") {
            config.stats.default_window = parse_var("BREWLOG_DEFAULT_WINDOW", &window)?;
        }

        if let Some(limit) = env("BREWLOG_TOP_TAGS") {
            config.stats.top_tags_limit = parse_var("BREWLOG_TOP_TAGS", &limit)?;
        }

        if let Some(limit) = env("BREWLOG_RECENT_LIMIT") {
            config.stats.recent_limit = parse_var("BREWLOG_RECENT_LIMIT", &limit)?;
        }

        if let Some(level) = env("BREWLOG_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim().parse().map_err(|e| ConfigError::EnvParse {
        var: var.to_string(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlog_common::TimeWindow;
    use brewlog_i18n::Locale;
    use std::collections::HashMap;

    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")).unwrap(), ConfigFormat::Yaml);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.json")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = ConfigLoader::parse("[stats]\ntop_tags_limit = 3\n", ConfigFormat::Toml).unwrap();
        assert_eq!(config.stats.top_tags_limit, 3);
        assert_eq!(config.stats.recent_limit, 5);
        assert_eq!(config.display.locale, Locale::Japanese);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "stats:\n  default_window: 3months\ndisplay:\n  locale: en\n  format: json\n";
        let config = ConfigLoader::parse(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.stats.default_window, TimeWindow::Last3Months);
        assert_eq!(config.display.locale, Locale::English);
        assert_eq!(config.display.format, crate::OutputFormat::Json);
        assert_eq!(ConfigLoader::parse("", ConfigFormat::Yaml).unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(ConfigLoader::parse("[stats]\ntop_tag_limit = 3\n", ConfigFormat::Toml).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        let env = env_of(&[
            ("BREWLOG_LOCALE", "en-US"),
            ("BREWLOG_DEFAULT_WINDOW", "month"),
            ("BREWLOG_TOP_TAGS", " 10 "),
            ("BREWLOG_RECENT_LIMIT", "0"),
            ("BREWLOG_LOG_LEVEL", "debug"),
        ]);
        ConfigLoader::apply_env_overrides(&mut config, &env).unwrap();

        assert_eq!(config.display.locale, Locale::English);
        assert_eq!(config.stats.default_window, TimeWindow::CurrentMonth);
        assert_eq!(config.stats.top_tags_limit, 10);
        assert_eq!(config.stats.recent_limit, 0);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_env_parse_errors_name_the_variable() {
        let mut config = Config::default();
        let err = ConfigLoader::apply_env_overrides(&mut config, &env_of(&[("BREWLOG_TOP_TAGS", "many")]))
            .unwrap_err();
        assert!(err.to_string().contains("BREWLOG_TOP_TAGS"));
    }

    #[test]
    fn test_defaults_when_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_from(None, dir.path(), env_of(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_error_converts_to_common_error() {
        let err: BrewLogError = ConfigError::Validation {
            problems: vec!["a".to_string(), "b".to_string()],
        }
        .into();
        assert!(err.to_string().contains("Configuration error"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "Configuration validation failed: a; b");
    }
}
