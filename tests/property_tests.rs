//! Property-based tests for entry_logger using proptest

use entry_logger::prelude::*;
use entry_logger::{UNKNOWN_LEVEL, VALUES_KEY};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn scalar() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        any::<i64>().prop_map(FieldValue::Int),
        any::<bool>().prop_map(FieldValue::Bool),
        "[a-z0-9 ]{0,12}".prop_map(FieldValue::String),
    ]
}

fn json_logger() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .min_level(LogLevel::Debug)
        .output_format(OutputFormat::Json)
        .sink(sink.clone())
        .exit_hook(Arc::new(|_| {}))
        .build();
    (logger, sink)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering is consistent with the numeric value
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1.as_u8();
        let val2 = level2.as_u8();

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// Test that parsing accepts case-insensitive input
    #[test]
    fn test_log_level_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let input = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_uppercase()
        };
        prop_assert_eq!(input.parse::<LogLevel>(), Ok(level));
    }

    #[test]
    fn test_name_of_out_of_range_is_unknown(raw in prop_oneof![i64::MIN..0i64, 5i64..i64::MAX]) {
        prop_assert_eq!(LogLevel::name_of(raw), UNKNOWN_LEVEL);
        prop_assert!(LogLevel::try_from(raw).is_err());
    }

    #[test]
    fn test_name_of_in_range_matches_display(level in any_level()) {
        prop_assert_eq!(LogLevel::name_of(i64::from(level.as_u8())), level.to_string());
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    #[test]
    fn test_emits_iff_at_or_above_minimum(min in any_level(), level in any_level()) {
        let (logger, sink) = json_logger();
        logger.set_min_level(min);

        logger.log(level, "probe");

        prop_assert_eq!(!sink.is_empty(), level >= min);
    }
}

// ============================================================================
// Enrichment Tests
// ============================================================================

proptest! {
    /// Scalars accumulate under "values" in call order
    #[test]
    fn test_scalars_keep_order(values in prop::collection::vec(scalar(), 1..8)) {
        let (logger, _sink) = json_logger();
        let mut builder = logger.entry();
        for value in &values {
            builder = builder.with(value.clone());
        }

        let entry = builder.into_entry();
        prop_assert_eq!(entry.data.get(VALUES_KEY).and_then(FieldValue::as_list), Some(values.as_slice()));
    }

    /// Every key of a merged map ends up in the bag, later maps winning
    #[test]
    fn test_map_merge_overwrites(
        first in prop::collection::btree_map("[a-e]", scalar(), 0..5),
        second in prop::collection::btree_map("[a-e]", scalar(), 0..5),
    ) {
        let (logger, _sink) = json_logger();
        let entry = logger.with(first.clone()).with(second.clone()).into_entry();

        let mut expected: BTreeMap<String, FieldValue> = first;
        expected.extend(second);
        prop_assert_eq!(entry.data.fields(), &expected);
    }

    /// Value sets exactly one key, verbatim
    #[test]
    fn test_value_sets_key(key in "[a-z]{1,8}", value in scalar()) {
        let (logger, _sink) = json_logger();
        let entry = logger.value(key.clone(), value.clone()).into_entry();

        prop_assert_eq!(entry.data.len(), 1);
        prop_assert_eq!(entry.data.get(&key), Some(&value));
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Any message survives a trip through the JSON formatter
    #[test]
    fn test_json_message_roundtrip(message in ".*", level in any_level()) {
        let (logger, sink) = json_logger();
        logger.log(level, message.clone());

        let lines = sink.lines();
        prop_assert_eq!(lines.len(), 1);
        let entry: LogEntry = serde_json::from_str(&lines[0]).unwrap();
        prop_assert_eq!(entry.message, message);
        prop_assert_eq!(entry.level, level);
    }

    /// The text header always carries the uppercase level name
    #[test]
    fn test_text_header(message in "[a-zA-Z0-9 ]{0,40}", level in any_level()) {
        let formatter = TextFormatter::with_colors(false);
        let mut entry = LogEntry::new();
        entry.level = level;
        entry.message = message.clone();

        let text = formatter.format(&entry).unwrap();
        let header = text.lines().next().unwrap();
        let expected = format!(" | {} | {} ", level.to_str().to_uppercase(), message.trim());
        prop_assert!(header.ends_with(&expected));
    }
}
