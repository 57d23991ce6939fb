//! Property-based tests for rust_log_facade using proptest

use proptest::prelude::*;
use rust_log_facade::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
        Just(Level::Fatal),
    ]
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Level string conversions roundtrip for every real level
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: Level = level.as_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(level.to_string(), level.as_str());
    }

    /// Anything outside the token set is rejected
    #[test]
    fn test_level_rejects_other_strings(token in "\\PC*") {
        let known = ["debug", "info", "warn", "warning", "error", "fatal"];
        prop_assume!(!known.contains(&token.as_str()));

        let err = Level::parse(&token).unwrap_err();
        prop_assert!(err.is_invalid_level());
    }

    /// Ordering matches the numeric discriminant
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert!(Level::Unset < level1);
    }

    /// JSON encoding is the bare token
    #[test]
    fn test_level_json_token(level in any_level()) {
        let json = serde_json::to_string(&level).unwrap();
        prop_assert_eq!(json.clone(), format!("\"{}\"", level.as_str()));

        let back: Level = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, level);
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

proptest! {
    /// The handler sees a message iff its level is at or above the threshold
    #[test]
    fn test_level_gate(threshold in any_level(), message_level in any_level()) {
        let memory = Arc::new(MemoryHandler::new());
        let logger = Logger::new(Arc::clone(&memory)).with_level(threshold);

        logger.log(message_level, "m");

        prop_assert_eq!(memory.len() == 1, message_level >= threshold);
    }

    /// Fatal passes every configured threshold
    #[test]
    fn test_fatal_always_passes(threshold in any_level()) {
        let logger = Logger::discard().with_level(threshold);
        prop_assert!(logger.enabled(Level::Fatal));
    }
}

// ============================================================================
// Field Derivation Tests
// ============================================================================

proptest! {
    /// Chained with_fields calls behave like successive map inserts
    #[test]
    fn test_with_fields_matches_map_overlay(
        layers in prop::collection::vec(
            prop::collection::btree_map("[a-d]", any::<i64>(), 0..4),
            0..5,
        )
    ) {
        let memory = Arc::new(MemoryHandler::new());
        let mut logger = Logger::new(Arc::clone(&memory));
        let mut expected: BTreeMap<String, FieldValue> = BTreeMap::new();

        for layer in &layers {
            let parent_fields = logger.fields().clone();
            logger = logger.with_fields(layer.iter().map(|(k, v)| (k.clone(), *v)));
            // the parent is never modified by deriving from it
            let parent = logger.parent().unwrap();
            prop_assert_eq!(parent.fields(), &parent_fields);

            for (k, v) in layer {
                expected.insert(k.clone(), FieldValue::Int(*v));
            }
        }

        logger.info("m");
        let entry = memory.last().unwrap();
        prop_assert_eq!(entry.fields, Fields::from(expected));
    }

    /// with_level never changes the visible field set
    #[test]
    fn test_with_level_preserves_fields(key in "[a-z]{1,8}", value in any::<i64>(), level in any_level()) {
        let logger = Logger::discard().with_field(key, value);
        let leveled = logger.with_level(level);
        prop_assert!(Fields::ptr_eq(logger.fields(), leveled.fields()));
    }
}
