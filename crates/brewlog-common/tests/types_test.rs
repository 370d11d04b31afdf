//! Tests for the coffee entry wire format in brewlog-common.
//!
//! This test suite covers:
//! - camelCase JSON field names and optional field defaults
//! - Legacy keys (`tastingDate`, lowercase category keys, `pour_over`)
//! - Unknown category strings surviving a round trip

use brewlog_common::types::*;
use std::collections::HashMap;

#[cfg(test)]
mod wire_format_tests {
    use super::*;

    #[test]
    fn test_minimal_entry_deserializes_with_defaults() {
        let json = r#"{ "id": "42", "rating": 4, "date": "2024-03-20" }"#;
        let entry: CoffeeEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, EntryId::new("42"));
        assert_eq!(entry.rating, 4);
        assert!(entry.name.is_empty());
        assert!(entry.coffee_type.is_none());
        assert!(entry.taste_profile.is_none());
        assert!(entry.tags.is_empty());
        assert!(!entry.is_favorite);
        assert_eq!(entry.likes, 0);
    }

    #[test]
    fn test_full_entry_uses_camel_case() {
        let json = r#"{
            "id": "1",
            "name": "エチオピア イルガチェフェ",
            "userId": "user1",
            "coffeeType": "single_origin",
            "brewMethod": "pour_over",
            "roastLevel": "light",
            "rating": 5,
            "tasteProfile": { "acidity": 4, "sweetness": 5, "bitterness": 2, "body": 3 },
            "tastingDate": "2024-03-20",
            "tags": ["エチオピア", "フルーティー"],
            "placeId": "place123",
            "isFavorite": true,
            "likes": 24
        }"#;
        let entry: CoffeeEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.user_id, Some(UserId::new("user1")));
        assert_eq!(entry.coffee_type, Some(CoffeeType::SingleOrigin));
        assert_eq!(entry.brew_method, Some(BrewMethod::HandDrip));
        assert_eq!(entry.roast_level, Some(RoastLevel::Light));
        assert_eq!(entry.taste_profile, Some(TasteProfile::full(4, 5, 2, 3)));
        assert_eq!(entry.date.to_string(), "2024-03-20");
        assert_eq!(entry.place_id.as_deref(), Some("place123"));
        assert!(entry.is_favorite);

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["coffeeType"], "SINGLE_ORIGIN");
        assert_eq!(value["brewMethod"], "HAND_DRIP");
        assert_eq!(value["date"], "2024-03-20");
        assert!(value.get("comment").is_none());
    }

    #[test]
    fn test_partial_taste_profile() {
        let json = r#"{ "id": "1", "rating": 3, "date": "2024-03-20", "tasteProfile": { "body": 5 } }"#;
        let entry: CoffeeEntry = serde_json::from_str(json).unwrap();
        let profile = entry.taste_profile.unwrap();

        assert_eq!(profile.body, Some(5));
        assert_eq!(profile.acidity, None);
        assert_eq!(serde_json::to_string(&profile).unwrap(), r#"{"body":5}"#);
    }

    #[test]
    fn test_unknown_categories_round_trip_verbatim() {
        let json = r#"{ "id": "1", "rating": 3, "date": "2024-03-20",
                        "coffeeType": "LIMITED_RELEASE", "brewMethod": "TURKISH" }"#;
        let entry: CoffeeEntry = serde_json::from_str(json).unwrap();

        assert_eq!(
            entry.coffee_type,
            Some(CoffeeType::Unrecognized("LIMITED_RELEASE".to_string()))
        );
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["brewMethod"], "TURKISH");
    }

    #[test]
    fn test_blank_categories_are_absent() {
        let json = r#"{ "id": "1", "rating": 3, "date": "2024-03-20",
                        "coffeeType": "", "brewMethod": "  ", "roastLevel": null }"#;
        let entry: CoffeeEntry = serde_json::from_str(json).unwrap();

        assert!(entry.coffee_type.is_none());
        assert!(entry.brew_method.is_none());
        assert!(entry.roast_level.is_none());
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("coffeeType").is_none());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let json = r#"{ "id": "1", "rating": 3, "date": "March 20" }"#;
        let err = serde_json::from_str::<CoffeeEntry>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_time_window_wire_names() {
        let window: TimeWindow = serde_json::from_str(r#""6months""#).unwrap();
        assert_eq!(window, TimeWindow::Last6Months);
        assert_eq!(serde_json::to_string(&window).unwrap(), r#""LAST_6_MONTHS""#);
        assert!(serde_json::from_str::<TimeWindow>(r#""yesterday""#).is_err());
    }
}

#[cfg(test)]
mod newtype_trait_tests {
    use super::*;

    #[test]
    fn test_entry_id_traits() {
        let id = EntryId::new("abc");
        assert_eq!(format!("{id}"), "abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);

        let mut map = HashMap::new();
        map.insert(id.clone(), 1);
        assert_eq!(map.get(&id), Some(&1));
    }

    #[test]
    fn test_categories_usable_as_map_keys() {
        let mut counts: HashMap<BrewMethod, usize> = HashMap::new();
        for raw in ["DRIP", "drip", "POUR_OVER", "HAND_DRIP", "TURKISH"] {
            *counts.entry(BrewMethod::parse_lenient(raw)).or_default() += 1;
        }
        assert_eq!(counts[&BrewMethod::Drip], 2);
        assert_eq!(counts[&BrewMethod::HandDrip], 2);
        assert_eq!(counts.len(), 3);
    }
}
