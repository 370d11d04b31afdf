//! # Brewlog Stats
//!
//! Statistics over coffee journal entries.
//!
//! This crate provides:
//! - Time-window filtering against an injected reference instant
//! - Single-pass accumulators for ratings, categories, tags and taste profiles
//! - The [`StatisticsAggregator`] that combines them into a summary
//! - Entry search and selection helpers
//!
//! Nothing here fails or mutates its input: every function borrows entries
//! and returns new values.
//!
//! # Example
//!
//! ```rust
//! use brewlog_common::{CoffeeEntry, CoffeeType, TimeWindow};
//! use brewlog_stats::StatisticsAggregator;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
//! let entries = vec![
//!     CoffeeEntry::new("1", 5, day).with_coffee_type(CoffeeType::Blend),
//!     CoffeeEntry::new("2", 3, day).with_tags(["nutty"]),
//! ];
//!
//! let reference = day.and_hms_opt(12, 0, 0).unwrap();
//! let summary = StatisticsAggregator::default().summarize(&entries, TimeWindow::CurrentMonth, reference);
//!
//! assert_eq!(summary.statistics.total_count, 2);
//! assert_eq!(summary.statistics.average_rating, 4.0);
//! assert_eq!(summary.statistics.counts_by_coffee_type.get(&CoffeeType::Blend), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod accumulator;
pub mod aggregator;
pub mod histogram;
pub mod search;
pub mod tags;
pub mod taste;
pub mod window;

pub use accumulator::{accumulate, CategoryCounter, EntryAccumulator, RatingAccumulator, RatingSummary};
pub use aggregator::{
    AggregationConfig, RecentEntry, Statistics, StatisticsAggregator, StatisticsSummary,
};
pub use histogram::{CategoryHistogram, CategoryShare};
pub use search::{distinct_tags, favorites, owned_by, search_entries, SearchScope};
pub use tags::{TagCount, TagTally};
pub use taste::{AverageTasteProfile, DimensionSupport, TasteAccumulator};
pub use window::{filter_by_window, WindowBounds};
