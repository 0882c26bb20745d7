//! Property tests for dotenv parsing.

use proptest::prelude::*;

use append_sw::infrastructure::bundler::parse_env;

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z_][A-Z0-9_]{0,15}").unwrap()
}

fn plain_value() -> impl Strategy<Value = String> {
    // No quotes, no comment marker, no surrounding whitespace.
    proptest::string::string_regex("[A-Za-z0-9:/._=-]{0,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The parser never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = parse_env(&s);
    }

    /// PROPERTY: `KEY=value` lines parse back to the same pair.
    #[test]
    fn property_plain_pairs_parse(k in key(), v in plain_value()) {
        let vars = parse_env(&format!("{k}={v}\n"));
        prop_assert_eq!(vars, vec![(k, v)]);
    }

    /// PROPERTY: A repeated key keeps the last value and appears once.
    #[test]
    fn property_last_assignment_wins(
        k in key(),
        first in plain_value(),
        second in plain_value(),
    ) {
        let vars = parse_env(&format!("{k}={first}\n{k}={second}\n"));
        prop_assert_eq!(vars, vec![(k, second)]);
    }
}
