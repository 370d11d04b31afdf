//! # Brewlog I18n
//!
//! Locales and display labels for Brewlog reports.
//!
//! Every enum-to-display-string mapping lives in one [`LabelCatalog`] per
//! [`Locale`]. Japanese is the default locale.
//!
//! # Example
//!
//! ```rust
//! use brewlog_common::BrewMethod;
//! use brewlog_i18n::{catalog, Locale, Message};
//!
//! let labels = catalog(Locale::Japanese);
//! assert_eq!(labels.brew_method(&BrewMethod::HandDrip), "ハンドドリップ");
//! assert_eq!(labels.message(Message::TopTags), "よく使うタグ");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod error;
pub mod locale;
pub mod messages;

pub use catalog::{catalog, LabelCatalog};
pub use error::{I18nError, I18nResult};
pub use locale::Locale;
pub use messages::{plural_form, Message};
