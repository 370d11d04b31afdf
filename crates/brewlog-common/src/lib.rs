//! # Brewlog Common
//!
//! Shared types, utilities, and common functionality for Brewlog.
//!
//! This crate provides the coffee entry model and the ambient pieces
//! (errors, logging, validation) used across all other crates in the
//! Brewlog workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
pub mod macros;

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{BrewLogError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use types::*;
pub use utils::*;
pub use validation::{EntryValidator, ValidationIssue, ValidationReport};
