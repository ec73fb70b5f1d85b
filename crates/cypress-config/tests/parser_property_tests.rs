//! Property tests for the argument scanner, key/value parser and case helpers

use cypress_config::RecordingSink;
use cypress_config::argv::{self, Flag};
use cypress_config::case::{to_camel_case, to_snake_case};
use cypress_config::keyvalue::parse_key_value_list;
use proptest::prelude::*;

fn flag_argv(flag: &Flag, values: &[String], use_equals: bool) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| {
            if use_equals {
                vec![format!("{}={value}", flag.long)]
            } else {
                vec![flag.long.to_string(), value.clone()]
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn scan_yields_every_occurrence_last_first(
        values in prop::collection::vec("[a-z0-9=]{1,8}", 0..6),
        use_equals in any::<bool>(),
    ) {
        let argv = flag_argv(&argv::CONFIG, &values, use_equals);
        let sink = RecordingSink::new();

        let found: Vec<&str> = argv::CONFIG.values(&argv, &sink).collect();
        let expected: Vec<&str> = values.iter().rev().map(String::as_str).collect();

        prop_assert_eq!(found, expected);
        prop_assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn first_value_is_the_last_occurrence(
        values in prop::collection::vec("[a-z0-9]{1,8}", 1..6),
    ) {
        let argv = flag_argv(&argv::PROJECT, &values, false);
        let sink = RecordingSink::new();

        prop_assert_eq!(
            argv::PROJECT.find_first_value(&argv, &sink),
            values.last().map(String::as_str)
        );
    }

    #[test]
    fn key_value_list_parses_back(
        pairs in prop::collection::vec(
            ("[a-zA-Z_][a-zA-Z0-9_]{0,8}", "[a-zA-Z0-9_./*]{1,8}"),
            1..6,
        ),
    ) {
        let list = pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(",");

        prop_assert_eq!(parse_key_value_list(&list), pairs);
    }

    #[test]
    fn camel_case_removes_underscores(words in prop::collection::vec("[a-z]{1,6}", 1..5)) {
        let snake = words.join("_");
        let camel = to_camel_case(&snake);

        prop_assert!(!camel.contains('_'));
        prop_assert_eq!(to_snake_case(&camel), snake);
    }
}
