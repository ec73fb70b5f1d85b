//! Comma-delimited `key=value` list parsing

use regex::Regex;
use std::sync::LazyLock;

/// One pair: a key free of `=`/`,`, then `=`, then a value free of `,`.
/// A pair starts at the beginning of the input or right after a comma.
static KEY_VALUE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|,)([^=,]+)=([^,]+)").unwrap());

/// Parse `key=value,key=value` into ordered pairs.
///
/// There is no escaping, so keys and values containing `,` (and keys
/// containing `=`) cannot be expressed. Fragments that do not form a pair are
/// skipped.
pub fn parse_key_value_list(input: &str) -> Vec<(String, String)> {
    KEY_VALUE_PATTERN
        .captures_iter(input)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}
