//! # Brewlog CLI
//!
//! Command line front end for the Brewlog crates.
//!
//! `brewlog stats` summarizes a journal export over a time window,
//! `brewlog search` finds entries, and `brewlog validate` checks entries
//! against the journal's input rules. Reports go to stdout as text or JSON;
//! logs go to stderr.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod report;

pub use app::{run, Outcome};
pub use cli::*;
pub use error::*;
