//! Convenience macros for categorical fields and error propagation

/// Declares a forward-compatible categorical enum.
///
/// Every listed variant has a canonical wire key plus optional aliases.
/// Keys match ASCII case-insensitively. Any other string is kept verbatim in
/// the generated `Unrecognized` variant instead of being rejected, so records
/// written by a newer client still deserialize and still count under their
/// literal value.
///
/// # Examples
///
/// ```rust
/// use brewlog_common::categorical;
///
/// categorical! {
///     /// Grind size.
///     pub enum Grind {
///         /// Fine grind.
///         Fine => "FINE",
///         /// Coarse grind.
///         Coarse => "COARSE" | "ROUGH",
///     }
/// }
///
/// assert_eq!(Grind::parse_lenient("rough"), Grind::Coarse);
/// assert_eq!(Grind::parse_lenient("MEDIUM").key(), "MEDIUM");
/// ```
#[macro_export]
macro_rules! categorical {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $key:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this build does not know, kept verbatim.
            Unrecognized(String),
        }

        impl $name {
            /// Every known variant, in declaration order.
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// Canonical wire key, or the literal value for unrecognized input.
            #[must_use]
            pub fn key(&self) -> &str {
                match self {
                    $(Self::$variant => $key,)+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            /// Whether this value is one of the known variants.
            #[must_use]
            pub const fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }

            /// Parses a key without ever failing.
            #[must_use]
            pub fn parse_lenient(raw: &str) -> Self {
                let trimmed = raw.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($key) $(|| trimmed.eq_ignore_ascii_case($alias))* {
                        return Self::$variant;
                    }
                )+
                Self::Unrecognized(raw.to_string())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::parse_lenient(s))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match Self::parse_lenient(&raw) {
                    Self::Unrecognized(_) => Self::Unrecognized(raw),
                    known => known,
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unrecognized(raw) => raw,
                    known => known.key().to_string(),
                }
            }
        }
    };
}

/// Add context to an error while preserving the error chain
///
/// # Examples
///
/// ```rust
/// use brewlog_common::{with_context, Result};
///
/// fn read_export() -> Result<String> {
///     std::fs::read_to_string("entries.json")
///         .map_err(|e| with_context!(e, "Failed to read entry export"))
/// }
/// ```
#[macro_export]
macro_rules! with_context {
    ($err:expr, $msg:literal $(,)?) => {
        $crate::BrewLogError::with_source($msg, $err)
    };
    ($err:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::BrewLogError::with_source(format!($fmt, $($arg)*), $err)
    };
}
