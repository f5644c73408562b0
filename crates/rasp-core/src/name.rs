//! # Name Capitalization
//!
//! Title-cases personal names as they are typed into the registration
//! form. Portuguese particles (`de`, `da`, `do`, `dos`, `das`, `e`) stay
//! lower-case unless they open the name.
//!
//! Case mapping is Unicode-aware (`joão` → `João`, `ÉRICA` → `Érica`). A
//! first letter whose upper-case form is more than one character (`ß`) is
//! left lower-case, which keeps the operation idempotent.

/// Particles kept lower-case in the middle of a name.
pub const DEFAULT_STOP_WORDS: [&str; 6] = ["de", "da", "do", "dos", "das", "e"];

/// Upper-case the first character of an already lower-cased word.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let upper: String = first.to_uppercase().collect();
    if upper.chars().count() != 1 {
        return word.to_string();
    }
    upper + chars.as_str()
}

/// Capitalize a name with the default Portuguese particles.
pub fn capitalize_name(input: &str) -> String {
    capitalize_name_with(input, &DEFAULT_STOP_WORDS)
}

/// Capitalize a name, keeping `stop_words` lower-case after the first word.
///
/// The input is split on whitespace and rejoined with single spaces.
/// Consecutive separators produce empty words, which are kept, so the
/// number of separators is preserved. The first non-empty word is always
/// capitalized.
pub fn capitalize_name_with<S: AsRef<str>>(input: &str, stop_words: &[S]) -> String {
    let mut seen_word = false;
    input
        .split(char::is_whitespace)
        .map(|word| {
            if word.is_empty() {
                return String::new();
            }
            let lower = word.to_lowercase();
            let leading = !seen_word;
            seen_word = true;
            if !leading
                && stop_words
                    .iter()
                    .any(|s| s.as_ref().to_lowercase() == lower)
            {
                lower
            } else {
                capitalize_first(&lower)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
