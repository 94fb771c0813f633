//! Property tests for tracing configuration

use proptest::prelude::*;
use connpane_core::{LoggingSettings, TracingConfig, TracingLevel};

fn arb_tracing_level() -> impl Strategy<Value = TracingLevel> {
    prop_oneof![
        Just(TracingLevel::Error),
        Just(TracingLevel::Warn),
        Just(TracingLevel::Info),
        Just(TracingLevel::Debug),
        Just(TracingLevel::Trace),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Level names round-trip through Display and FromStr
    #[test]
    fn level_name_roundtrip(level in arb_tracing_level()) {
        let parsed: TracingLevel = level.to_string().parse().expect("own name parses");
        prop_assert_eq!(parsed, level);
    }

    /// Without a custom filter the directive names both crates at the level
    #[test]
    fn directive_uses_level(level in arb_tracing_level()) {
        let directive = TracingConfig::new().with_level(level).filter_directive();
        prop_assert_eq!(
            directive,
            format!("connpane_core={level},connpane_cli={level}")
        );
    }

    /// A custom filter from settings overrides the level
    #[test]
    fn settings_filter_overrides_level(
        level in arb_tracing_level(),
        filter in "[a-z_]{1,10}=(debug|info|warn)",
    ) {
        let settings = LoggingSettings {
            level: level.to_string(),
            filter: Some(filter.clone()),
            file: None,
        };
        let config = TracingConfig::from_settings(&settings);
        prop_assert_eq!(config.level, level);
        prop_assert_eq!(config.filter_directive(), filter);
    }

    /// Verbosity never lowers below the base when no flag is given
    #[test]
    fn zero_verbosity_keeps_base(level in arb_tracing_level()) {
        prop_assert_eq!(TracingLevel::from_verbosity(level, 0), level);
    }
}
