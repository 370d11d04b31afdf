//! Single-pass accumulators over coffee entries.
//!
//! Every statistic the aggregator reports is an [`EntryAccumulator`]. The
//! aggregator feeds each entry of the filtered sequence to all of them in one
//! pass, and callers can run their own accumulators the same way with
//! [`accumulate`].

use crate::histogram::CategoryHistogram;
use brewlog_common::{BrewMethod, CoffeeEntry, CoffeeType, RoastLevel};
use std::fmt;
use std::hash::Hash;

/// A statistic built by observing entries one at a time.
pub trait EntryAccumulator {
    /// Result produced once every entry was observed.
    type Output;

    /// Folds one entry into the running state.
    fn observe(&mut self, entry: &CoffeeEntry);

    /// Consumes the accumulator and produces its result.
    fn finish(self) -> Self::Output;
}

/// Runs a fresh accumulator over `entries`.
pub fn accumulate<'a, A, I>(entries: I) -> A::Output
where
    A: EntryAccumulator + Default,
    I: IntoIterator<Item = &'a CoffeeEntry>,
{
    let mut accumulator = A::default();
    for entry in entries {
        accumulator.observe(entry);
    }
    accumulator.finish()
}

/// Entry count and mean rating.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingSummary {
    /// Number of entries observed.
    pub total_count: usize,
    /// Mean rating, 0 when nothing was observed.
    pub average_rating: f64,
}

/// Accumulates [`RatingSummary`].
#[derive(Debug, Clone, Default)]
pub struct RatingAccumulator {
    count: usize,
    sum: u64,
}

impl EntryAccumulator for RatingAccumulator {
    type Output = RatingSummary;

    fn observe(&mut self, entry: &CoffeeEntry) {
        self.count += 1;
        self.sum += u64::from(entry.rating);
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(self) -> RatingSummary {
        let average_rating = if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        };
        RatingSummary {
            total_count: self.count,
            average_rating,
        }
    }
}

/// Reads one optional categorical field of an entry.
pub type FieldExtractor<K> = fn(&CoffeeEntry) -> Option<&K>;

/// Counts the values of one categorical field. Entries where the field is
/// absent are skipped.
#[derive(Clone)]
pub struct CategoryCounter<K> {
    extract: FieldExtractor<K>,
    histogram: CategoryHistogram<K>,
}

impl<K: fmt::Debug> fmt::Debug for CategoryCounter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryCounter")
            .field("histogram", &self.histogram)
            .finish_non_exhaustive()
    }
}

impl<K: Clone + Eq + Hash> CategoryCounter<K> {
    /// Creates a counter over the field read by `extract`.
    #[must_use]
    pub fn new(extract: FieldExtractor<K>) -> Self {
        Self {
            extract,
            histogram: CategoryHistogram::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> EntryAccumulator for CategoryCounter<K> {
    type Output = CategoryHistogram<K>;

    fn observe(&mut self, entry: &CoffeeEntry) {
        if let Some(key) = (self.extract)(entry) {
            self.histogram.increment(key);
        }
    }

    fn finish(self) -> CategoryHistogram<K> {
        self.histogram
    }
}

fn coffee_type_of(entry: &CoffeeEntry) -> Option<&CoffeeType> {
    entry.coffee_type.as_ref()
}

fn brew_method_of(entry: &CoffeeEntry) -> Option<&BrewMethod> {
    entry.brew_method.as_ref()
}

fn roast_level_of(entry: &CoffeeEntry) -> Option<&RoastLevel> {
    entry.roast_level.as_ref()
}

impl CategoryCounter<CoffeeType> {
    /// Counter over `coffeeType`.
    #[must_use]
    pub fn coffee_types() -> Self {
        Self::new(coffee_type_of)
    }
}

impl Default for CategoryCounter<CoffeeType> {
    fn default() -> Self {
        Self::coffee_types()
    }
}

impl CategoryCounter<BrewMethod> {
    /// Counter over `brewMethod`.
    #[must_use]
    pub fn brew_methods() -> Self {
        Self::new(brew_method_of)
    }
}

impl Default for CategoryCounter<BrewMethod> {
    fn default() -> Self {
        Self::brew_methods()
    }
}

impl CategoryCounter<RoastLevel> {
    /// Counter over `roastLevel`.
    #[must_use]
    pub fn roast_levels() -> Self {
        Self::new(roast_level_of)
    }
}

impl Default for CategoryCounter<RoastLevel> {
    fn default() -> Self {
        Self::roast_levels()
    }
}
