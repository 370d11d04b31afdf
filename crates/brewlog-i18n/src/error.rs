//! Error types for internationalization operations

use brewlog_common::BrewLogError;
use thiserror::Error;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// The language identifier is valid but no catalog exists for it
    #[error("Unsupported locale '{code}', expected one of: {supported}")]
    UnsupportedLocale {
        /// Code as supplied by the caller.
        code: String,
        /// Comma separated list of supported codes.
        supported: String,
    },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for BrewLogError {
    fn from(err: I18nError) -> Self {
        Self::parse_with_source("Locale could not be resolved", err)
    }
}
