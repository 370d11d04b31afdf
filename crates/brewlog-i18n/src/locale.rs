//! Locale management and utilities

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Supported locales
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// Japanese, the journal's native language.
    #[default]
    Japanese,
    /// English.
    English,
}

impl Locale {
    /// Get the language code for this locale
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Japanese => "ja-JP",
            Self::English => "en-US",
        }
    }

    /// Get the short language code for this locale
    #[must_use]
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::English => "en",
        }
    }

    /// Get all supported locales
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Japanese, Self::English]
    }

    /// Get the display name for this locale
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Japanese => "日本語",
            Self::English => "English",
        }
    }

    /// Parse a locale from a BCP-47 language code.
    ///
    /// Only the language subtag decides, so `ja`, `ja-JP` and `en-GB` all
    /// resolve.
    pub fn from_code(code: &str) -> I18nResult<Self> {
        let id: LanguageIdentifier = code
            .trim()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(code.to_string()))?;

        Self::all()
            .into_iter()
            .find(|locale| id.language.as_str() == locale.short_code())
            .ok_or_else(|| I18nError::UnsupportedLocale {
                code: code.to_string(),
                supported: Self::all().map(Self::code).join(", "),
            })
    }

    /// Convert to a `LanguageIdentifier`
    pub fn to_language_identifier(self) -> I18nResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.code().to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> I18nResult<Self> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = I18nError;

    fn try_from(value: String) -> I18nResult<Self> {
        Self::from_code(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_japanese() {
        assert_eq!(Locale::default(), Locale::Japanese);
        assert_eq!(Locale::default().code(), "ja-JP");
    }

    #[test]
    fn test_from_code_accepts_short_and_full_forms() {
        assert_eq!(Locale::from_code("ja").unwrap(), Locale::Japanese);
        assert_eq!(Locale::from_code("ja-JP").unwrap(), Locale::Japanese);
        assert_eq!(Locale::from_code("en").unwrap(), Locale::English);
        assert_eq!(Locale::from_code("en-GB").unwrap(), Locale::English);
    }

    #[test]
    fn test_from_code_errors() {
        assert!(matches!(
            Locale::from_code("not a locale!"),
            Err(I18nError::InvalidLanguageId(_))
        ));
        let err = Locale::from_code("fr-FR").unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedLocale { .. }));
        assert!(err.to_string().contains("ja-JP, en-US"));
    }

    #[test]
    fn test_language_identifier_round_trip() {
        for locale in Locale::all() {
            let id = locale.to_language_identifier().unwrap();
            assert_eq!(id.to_string(), locale.code());
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Locale::English).unwrap();
        assert_eq!(json, r#""en-US""#);
        let parsed: Locale = serde_json::from_str(r#""ja""#).unwrap();
        assert_eq!(parsed, Locale::Japanese);
    }
}
