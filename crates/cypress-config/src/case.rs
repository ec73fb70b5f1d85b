//! snake_case and camelCase conversion for environment-derived keys

/// `integration_folder` / `INTEGRATION_FOLDER` to `integrationFolder`.
///
/// The first segment is lowercased; every following segment is lowercased
/// and then capitalised. The transform loses information and has no inverse.
pub fn to_camel_case(value: &str) -> String {
    value
        .split('_')
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

/// `integrationFolder` to `integration_folder`.
pub fn to_snake_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Lowercase `word`, then uppercase the first letter of every word in it.
pub fn capitalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_word_start = true;
    for c in word.to_lowercase().chars() {
        let is_word_char = c.is_alphanumeric() || c == '_';
        if is_word_char && at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !is_word_char;
    }
    out
}
