//! Property-based tests for log_pipeline using proptest

use proptest::prelude::*;
use log_pipeline::prelude::*;

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Test that Level string conversions roundtrip correctly
    #[test]
    fn test_level_str_roundtrip(level in prop_oneof![
        Just(Level::Info),
        Just(Level::Warning),
        Just(Level::Error),
    ]) {
        let as_str = level.to_str();
        let parsed: Level = as_str.parse().unwrap();
        assert_eq!(level, parsed);
    }

    /// Test that Level ordering is consistent with its discriminants
    #[test]
    fn test_level_ordering(
        level1 in prop_oneof![
            Just(Level::Info),
            Just(Level::Warning),
            Just(Level::Error),
        ],
        level2 in prop_oneof![
            Just(Level::Info),
            Just(Level::Warning),
            Just(Level::Error),
        ]
    ) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        assert_eq!(level1 <= level2, val1 <= val2);
        assert_eq!(level1 < level2, val1 < val2);
        assert_eq!(level1 >= level2, val1 >= val2);
        assert_eq!(level1 > level2, val1 > val2);
    }

    /// Test that Level Display matches to_str
    #[test]
    fn test_level_display(level in prop_oneof![
        Just(Level::Info),
        Just(Level::Warning),
        Just(Level::Error),
    ]) {
        assert_eq!(format!("{}", level), level.to_str());
    }

    /// Test that parsing accepts case-insensitive input
    #[test]
    fn test_level_case_insensitive(use_lower in any::<bool>()) {
        let levels = vec!["INFO", "WARN", "WARNING", "ERROR"];

        for level_str in levels {
            let input = if use_lower {
                level_str.to_lowercase()
            } else {
                level_str.to_string()
            };

            let parsed: std::result::Result<Level, String> = input.parse();
            assert!(parsed.is_ok(), "Failed to parse: {}", input);
        }
    }
}

// ============================================================================
// LogRecord Message Sanitization Tests
// ============================================================================

proptest! {
    /// Test that newlines are sanitized in log messages (prevents log injection)
    #[test]
    fn test_message_sanitization_newlines(message in ".*") {
        let record = LogRecord::new(Level::Info, message.clone());

        assert!(!record.message.contains('\n'),
                "LogRecord contains unsanitized newline: {:?}", record.message);

        if message.contains('\n') {
            assert!(record.message.contains("\\n"),
                    "Newlines not properly escaped: {:?}", record.message);
        }
    }

    /// Test that carriage returns are sanitized
    #[test]
    fn test_message_sanitization_carriage_return(message in ".*") {
        let record = LogRecord::new(Level::Info, message.clone());

        assert!(!record.message.contains('\r'),
                "LogRecord contains unsanitized carriage return: {:?}", record.message);
    }

    /// Test that tabs are sanitized
    #[test]
    fn test_message_sanitization_tabs(message in ".*") {
        let record = LogRecord::new(Level::Warning, message.clone());

        assert!(!record.message.contains('\t'),
                "LogRecord contains unsanitized tab: {:?}", record.message);
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Every formatted record renders as exactly one line
    #[test]
    fn test_formatted_record_is_single_line(
        message in ".*",
        level in prop_oneof![
            Just(Level::Info),
            Just(Level::Warning),
            Just(Level::Error),
        ]
    ) {
        let formatter = Formatter::new();
        let line = formatter.format(&LogRecord::new(level, message));

        assert!(!line.contains('\n'), "formatted line contains newline: {:?}", line);
    }

    /// The level tag always appears bracketed in the rendered line
    #[test]
    fn test_formatted_record_contains_level_tag(
        message in "[a-zA-Z0-9 ]{0,40}",
        level in prop_oneof![
            Just(Level::Info),
            Just(Level::Warning),
            Just(Level::Error),
        ]
    ) {
        let formatter = Formatter::new();
        let line = formatter.format(&LogRecord::new(level, message.clone()));

        assert!(line.contains(&format!("[{}]", level.to_str())));
        assert!(line.ends_with(&message));
    }
}
