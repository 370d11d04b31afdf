//! Average taste profile with per-dimension support counts.

use crate::accumulator::EntryAccumulator;
use brewlog_common::{CoffeeEntry, TasteDimension};
use serde::Serialize;

/// Highest score on the taste scale.
pub const TASTE_SCALE_MAX: f64 = 5.0;

/// Number of entries contributing to each dimension's average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DimensionSupport {
    /// Entries with an acidity score.
    pub acidity: usize,
    /// Entries with a sweetness score.
    pub sweetness: usize,
    /// Entries with a bitterness score.
    pub bitterness: usize,
    /// Entries with a body score.
    pub body: usize,
}

impl DimensionSupport {
    /// Support for one dimension.
    #[must_use]
    pub const fn get(&self, dimension: TasteDimension) -> usize {
        match dimension {
            TasteDimension::Acidity => self.acidity,
            TasteDimension::Sweetness => self.sweetness,
            TasteDimension::Bitterness => self.bitterness,
            TasteDimension::Body => self.body,
        }
    }
}

/// Mean of each taste dimension over the entries where it is present.
///
/// A dimension nobody scored averages to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageTasteProfile {
    /// Mean acidity.
    pub acidity: f64,
    /// Mean sweetness.
    pub sweetness: f64,
    /// Mean bitterness.
    pub bitterness: f64,
    /// Mean body.
    pub body: f64,
    /// Contributing entries per dimension.
    pub support: DimensionSupport,
    /// Entries carrying a taste profile at all.
    pub entries_with_profile: usize,
}

impl AverageTasteProfile {
    /// Mean for one dimension.
    #[must_use]
    pub const fn get(&self, dimension: TasteDimension) -> f64 {
        match dimension {
            TasteDimension::Acidity => self.acidity,
            TasteDimension::Sweetness => self.sweetness,
            TasteDimension::Bitterness => self.bitterness,
            TasteDimension::Body => self.body,
        }
    }

    /// Mean for one dimension as a fraction of the full scale, for bars.
    #[must_use]
    pub fn bar_fraction(&self, dimension: TasteDimension) -> f64 {
        self.get(dimension) / TASTE_SCALE_MAX
    }

    /// Whether no entry contributed to any dimension.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.support.acidity == 0
            && self.support.sweetness == 0
            && self.support.bitterness == 0
            && self.support.body == 0
    }
}

/// Accumulates [`AverageTasteProfile`].
#[derive(Debug, Clone, Default)]
pub struct TasteAccumulator {
    sums: [u64; 4],
    support: [usize; 4],
    entries_with_profile: usize,
}

impl TasteAccumulator {
    #[allow(clippy::cast_precision_loss)]
    fn mean(&self, dimension: TasteDimension) -> f64 {
        let index = dimension.index();
        match self.support[index] {
            0 => 0.0,
            n => self.sums[index] as f64 / n as f64,
        }
    }
}

impl EntryAccumulator for TasteAccumulator {
    type Output = AverageTasteProfile;

    fn observe(&mut self, entry: &CoffeeEntry) {
        let Some(profile) = &entry.taste_profile else {
            return;
        };
        self.entries_with_profile += 1;
        for (dimension, score) in profile.scores() {
            self.sums[dimension.index()] += u64::from(score);
            self.support[dimension.index()] += 1;
        }
    }

    fn finish(self) -> AverageTasteProfile {
        AverageTasteProfile {
            acidity: self.mean(TasteDimension::Acidity),
            sweetness: self.mean(TasteDimension::Sweetness),
            bitterness: self.mean(TasteDimension::Bitterness),
            body: self.mean(TasteDimension::Body),
            support: DimensionSupport {
                acidity: self.support[TasteDimension::Acidity.index()],
                sweetness: self.support[TasteDimension::Sweetness.index()],
                bitterness: self.support[TasteDimension::Bitterness.index()],
                body: self.support[TasteDimension::Body.index()],
            },
            entries_with_profile: self.entries_with_profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::accumulate;
    use brewlog_common::test_utils::entry;
    use brewlog_common::TasteProfile;

    #[test]
    fn test_full_profiles_average() {
        let entries = vec![
            entry("1", 5, "2024-03-01").with_taste_profile(TasteProfile::full(4, 5, 2, 3)),
            entry("2", 3, "2024-03-02").with_taste_profile(TasteProfile::full(2, 3, 4, 4)),
        ];
        let average = accumulate::<TasteAccumulator, _>(&entries);

        assert_eq!(average.acidity, 3.0);
        assert_eq!(average.sweetness, 4.0);
        assert_eq!(average.bitterness, 3.0);
        assert_eq!(average.body, 3.5);
        assert_eq!(average.entries_with_profile, 2);
        assert_eq!(average.support.body, 2);
    }

    #[test]
    fn test_missing_dimensions_are_excluded_from_denominator() {
        let entries = vec![
            entry("1", 3, "2024-03-01").with_taste_profile(TasteProfile::full(4, 4, 4, 4)),
            entry("2", 3, "2024-03-02")
                .with_taste_profile(TasteProfile::default().with(TasteDimension::Acidity, Some(2))),
            entry("3", 3, "2024-03-03"),
        ];
        let average = accumulate::<TasteAccumulator, _>(&entries);

        assert_eq!(average.acidity, 3.0);
        assert_eq!(average.body, 4.0);
        assert_eq!(average.support.acidity, 2);
        assert_eq!(average.support.get(TasteDimension::Body), 1);
        assert_eq!(average.entries_with_profile, 2);
    }

    #[test]
    fn test_no_profiles_average_to_zero() {
        let entries = vec![entry("1", 3, "2024-03-01")];
        let average = accumulate::<TasteAccumulator, _>(&entries);
        assert!(average.is_empty());
        for dimension in TasteDimension::ALL {
            assert_eq!(average.get(dimension), 0.0);
            assert_eq!(average.bar_fraction(dimension), 0.0);
        }
    }

    #[test]
    fn test_bar_fraction() {
        let entries = vec![entry("1", 3, "2024-03-01").with_taste_profile(TasteProfile::full(5, 1, 3, 4))];
        let average = accumulate::<TasteAccumulator, _>(&entries);
        assert_eq!(average.bar_fraction(TasteDimension::Acidity), 1.0);
        assert!((average.bar_fraction(TasteDimension::Sweetness) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_serializes_with_support() {
        let average = accumulate::<TasteAccumulator, _>(std::iter::empty());
        let value = serde_json::to_value(average).unwrap();
        assert_eq!(value["entriesWithProfile"], 0);
        assert_eq!(value["support"]["acidity"], 0);
        assert_eq!(value["body"], 0.0);
    }
}
