//! Application-wide error types using thiserror.

use brewlog_common::BrewLogError;
use brewlog_config::ConfigError;
use std::path::PathBuf;

/// Main CLI error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Error raised by a library crate.
    #[error(transparent)]
    Core(#[from] BrewLogError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The journal file could not be read.
    #[error("Failed to read journal '{}': {source}", .path.display())]
    ReadJournal {
        /// Path as given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The journal file is not a valid export.
    #[error("Failed to parse journal '{}': {source}", .path.display())]
    ParseJournal {
        /// Path as given on the command line.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be encoded as JSON.
    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the CLI application.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Message followed by every source not already part of it.
    #[must_use]
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_report_includes_nested_causes_once() {
        let err = CliError::from(BrewLogError::config_with_source(
            "Configuration could not be loaded",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        ));
        assert_eq!(
            err.report(),
            "Configuration error: Configuration could not be loaded: no such file"
        );
    }

    #[test]
    fn test_read_error_names_the_path() {
        let err = CliError::ReadJournal {
            path: PathBuf::from("journal.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "Failed to read journal 'journal.json': no such file");
        assert_eq!(err.report(), err.to_string());
    }
}
