use std::collections::HashSet;

use crate::taxonomy::SYNONYMS;

/// Fold a genre name to its canonical spelling via the synonym table.
/// Names without a synonym entry pass through unchanged.
pub fn canonical_name(genre: &str) -> &str {
    SYNONYMS.get(genre).copied().unwrap_or(genre)
}

/// Canonicalize synonymous spellings, then drop duplicates while keeping
/// first-seen order.
pub fn dedup(genres: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(genres.len());

    for genre in genres {
        let canonical = canonical_name(&genre).to_string();
        if seen.insert(canonical.clone()) {
            unique.push(canonical);
        }
    }

    unique
}
