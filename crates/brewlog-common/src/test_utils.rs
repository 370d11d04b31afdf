//! Test utilities and shared fixtures for the Brewlog crates.
//!
//! Enabled for unit tests and, through the `testing` feature, for the
//! integration tests of downstream crates.

use crate::{BrewMethod, CoffeeEntry, CoffeeType, RoastLevel, TasteProfile};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Calendar date fixture.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Reference instant fixture.
#[must_use]
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, min, sec)
        .expect("valid fixture time")
}

/// Minimal entry with the given rating and ISO date.
#[must_use]
pub fn entry(id: &str, rating: u8, iso_date: &str) -> CoffeeEntry {
    let date = crate::parse_iso_date(iso_date).expect("valid fixture date");
    CoffeeEntry::new(id, rating, date)
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// A small journal shared by tests across the workspace.
pub mod journal_fixtures {
    use super::*;

    /// Three entries from March 2024, newest first.
    #[must_use]
    pub fn sample_journal() -> Vec<CoffeeEntry> {
        vec![
            CoffeeEntry::new("1", 5, date(2024, 3, 20))
                .with_name("エチオピア イルガチェフェ")
                .with_user("user1")
                .with_coffee_type(CoffeeType::SingleOrigin)
                .with_brew_method(BrewMethod::HandDrip)
                .with_roast_level(RoastLevel::Light)
                .with_location("スペシャルティコーヒーショップ")
                .with_taste_profile(TasteProfile::full(4, 5, 2, 3))
                .with_tags(["エチオピア", "フルーティー", "ベリー系"])
                .with_comment("フルーティーな香りと酸味が特徴的。今まで飲んだ中で最高のコーヒーかも！")
                .with_favorite(true),
            CoffeeEntry::new("2", 4, date(2024, 3, 18))
                .with_name("グアテマラ アンティグア")
                .with_user("user2")
                .with_coffee_type(CoffeeType::SingleOrigin)
                .with_brew_method(BrewMethod::FrenchPress)
                .with_roast_level(RoastLevel::Medium)
                .with_location("カフェ・モカ")
                .with_taste_profile(TasteProfile::full(3, 4, 3, 4))
                .with_tags(["グアテマラ", "チョコレート", "ナッツ"])
                .with_comment("チョコレートのような風味があり、バランスが良い。朝の一杯に最適。"),
            CoffeeEntry::new("3", 3, date(2024, 3, 15))
                .with_name("ブラジル サントス")
                .with_user("user3")
                .with_coffee_type(CoffeeType::Blend)
                .with_brew_method(BrewMethod::Drip)
                .with_roast_level(RoastLevel::MediumDark)
                .with_location("自宅")
                .with_taste_profile(TasteProfile::full(2, 3, 4, 4))
                .with_tags(["ブラジル", "ナッツ", "キャラメル"])
                .with_comment("ナッツのような風味。普段使いに良い。")
                .with_favorite(true),
        ]
    }

    /// The sample journal serialized the way exports store it.
    #[must_use]
    pub fn sample_journal_json() -> String {
        serde_json::to_string_pretty(&sample_journal()).expect("fixture serializes")
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "testing")]
pub mod property_testing {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for scores on the 1-5 scale.
    pub fn score_strategy() -> impl Strategy<Value = u8> {
        1u8..=5
    }

    /// Strategy for partially filled taste profiles.
    pub fn taste_profile_strategy() -> impl Strategy<Value = TasteProfile> {
        (
            proptest::option::of(score_strategy()),
            proptest::option::of(score_strategy()),
            proptest::option::of(score_strategy()),
            proptest::option::of(score_strategy()),
        )
            .prop_map(|(acidity, sweetness, bitterness, body)| TasteProfile {
                acidity,
                sweetness,
                bitterness,
                body,
            })
    }

    /// Strategy for coffee types, including unknown literals.
    pub fn coffee_type_strategy() -> impl Strategy<Value = CoffeeType> {
        prop_oneof![
            4 => proptest::sample::select(CoffeeType::KNOWN.to_vec()),
            1 => "[A-Z]{3,8}".prop_map(|raw| CoffeeType::parse_lenient(&raw)),
        ]
    }

    /// Strategy for brew methods, including unknown literals.
    pub fn brew_method_strategy() -> impl Strategy<Value = BrewMethod> {
        prop_oneof![
            4 => proptest::sample::select(BrewMethod::KNOWN.to_vec()),
            1 => "[A-Z]{3,8}".prop_map(|raw| BrewMethod::parse_lenient(&raw)),
        ]
    }

    /// Strategy for tags drawn from a small vocabulary so that ties happen.
    pub fn tag_strategy() -> impl Strategy<Value = String> {
        proptest::sample::select(vec![
            "fruity", "nutty", "floral", "chocolate", "berry", "caramel", "citrus",
        ])
        .prop_map(str::to_string)
    }

    /// Strategy for entries dated between 2023-01-01 and 2024-12-31.
    pub fn entry_strategy() -> impl Strategy<Value = CoffeeEntry> {
        (
            "[a-z0-9]{1,8}",
            score_strategy(),
            0i64..731,
            proptest::option::of(coffee_type_strategy()),
            proptest::option::of(brew_method_strategy()),
            proptest::option::of(taste_profile_strategy()),
            proptest::collection::vec(tag_strategy(), 0..6),
        )
            .prop_map(|(id, rating, offset, coffee_type, brew_method, profile, tags)| {
                let mut entry = CoffeeEntry::new(id, rating, date(2023, 1, 1) + chrono::Duration::days(offset))
                    .with_tags(tags);
                entry.coffee_type = coffee_type;
                entry.brew_method = brew_method;
                entry.taste_profile = profile;
                entry
            })
    }

    /// Strategy for whole journals.
    pub fn journal_strategy(max_len: usize) -> impl Strategy<Value = Vec<CoffeeEntry>> {
        proptest::collection::vec(entry_strategy(), 0..=max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_datetime_fixture() {
        let instant = datetime(2024, 3, 31, 12, 0, 0);
        assert_eq!(instant.year(), 2024);
        assert_eq!(instant.month(), 3);
        assert_eq!(instant.day(), 31);
        assert_eq!(instant.hour(), 12);
    }

    #[test]
    fn test_entry_fixture_parses_date() {
        let fixture = entry("x", 4, "2024-02-29");
        assert_eq!(fixture.date, date(2024, 2, 29));
        assert_eq!(fixture.rating, 4);
    }

    #[test]
    fn test_sample_journal_round_trips_through_json() {
        let json = journal_fixtures::sample_journal_json();
        let parsed: Vec<CoffeeEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, journal_fixtures::sample_journal());
    }

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0001, 0.001);
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.1, 0.05);
    }
}
