//! Tag cleaning: the first stage of the extraction pipeline.
//!
//! Transforms raw tag strings into a canonical lowercase form so that the
//! later filter and resolver stages compare like with like. Order of
//! surviving tags is preserved; duplicate removal is deferred to the final
//! stage.

use unicode_normalization::UnicodeNormalization;

/// Clean a single raw tag.
///
/// Steps applied in order:
/// 1. Unicode NFKC + lower-casing
/// 2. Erase every character that is not alphanumeric, whitespace, or hyphen
/// 3. Whitespace collapse + trim
pub fn clean(tag: &str) -> String {
    let s = unicode_lower(tag);
    let s = erase_special(&s);
    collapse_whitespace(&s)
}

/// Clean a sequence of raw tags, dropping results outside the inclusive
/// character-length bounds. Empty strings never survive (length 0).
pub fn clean_all(tags: &[String], min_len: usize, max_len: usize) -> Vec<String> {
    tags.iter()
        .map(|tag| clean(tag))
        .filter(|tag| {
            let len = tag.chars().count();
            len >= min_len && len <= max_len
        })
        .collect()
}

/// Apply NFKC normalization (fullwidth -> ASCII, compose diacritics) and lowercase.
fn unicode_lower(s: &str) -> String {
    s.nfkc().collect::<String>().to_lowercase()
}

/// Strip punctuation and symbols, keeping alphanumerics, whitespace, and hyphens.
fn erase_special(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect()
}

/// Trim and collapse whitespace runs to a single space.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
