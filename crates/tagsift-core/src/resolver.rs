use std::collections::HashMap;

use crate::taxonomy::{GENRE_FAMILIES, GENRE_KEYWORDS, MUSICAL_INDICATORS, NON_GENRE_KEYWORDS, TAXONOMY};

/// Result of attempting to resolve one tag to a genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Tag is a taxonomy key; carries the mapped canonical name.
    Exact(String),
    /// Closest taxonomy key scored at or above the threshold; carries the
    /// canonical name and the similarity score (0-100).
    Fuzzy(String, u32),
    /// Tag kept verbatim on genre-keyword evidence.
    Keyword(String),
    /// Tag kept verbatim on surrounding-tag context.
    Context(String),
    /// Not a genre.
    NoMatch,
}

impl Resolution {
    /// The genre name this resolution yields, if any.
    pub fn into_genre(self) -> Option<String> {
        match self {
            Resolution::Exact(genre)
            | Resolution::Fuzzy(genre, _)
            | Resolution::Keyword(genre)
            | Resolution::Context(genre) => Some(genre),
            Resolution::NoMatch => None,
        }
    }
}

/// Pre-built index over the genre taxonomy.
///
/// Strategy order: exact -> fuzzy -> keyword -> context -> NoMatch, stopping
/// at the first success. The exact index is built once at construction; all
/// queries are `&self`.
pub struct GenreResolver {
    exact_index: HashMap<&'static str, &'static str>,
    fuzzy_threshold: u32,
}

impl GenreResolver {
    pub fn new(fuzzy_threshold: u32) -> Self {
        let mut exact_index = HashMap::with_capacity(TAXONOMY.len());
        for &(spelling, canonical) in TAXONOMY {
            exact_index.entry(spelling).or_insert(canonical);
        }
        Self {
            exact_index,
            fuzzy_threshold,
        }
    }

    /// Resolve a cleaned tag, considering the whole filtered tag set as
    /// context. Pure: depends only on the arguments and the frozen tables.
    pub fn resolve(&self, tag: &str, all_tags: &[String]) -> Resolution {
        if tag.is_empty() {
            return Resolution::NoMatch;
        }

        if let Some(&canonical) = self.exact_index.get(tag) {
            tracing::debug!(method = "exact", tag, canonical, "tag resolved");
            return Resolution::Exact(canonical.to_string());
        }

        if let Some((canonical, score)) = self.fuzzy_match(tag) {
            tracing::debug!(method = "fuzzy", tag, canonical, score, "tag resolved");
            return Resolution::Fuzzy(canonical.to_string(), score);
        }

        if self.keyword_match(tag) {
            tracing::debug!(method = "keyword", tag, "tag resolved");
            return Resolution::Keyword(tag.to_string());
        }

        if self.context_match(tag, all_tags) {
            tracing::debug!(method = "context", tag, "tag resolved");
            return Resolution::Context(tag.to_string());
        }

        tracing::debug!(tag, "no resolution");
        Resolution::NoMatch
    }

    /// Best-scoring taxonomy key within the threshold, if any.
    ///
    /// Scans the taxonomy in declaration order with a strictly-greater
    /// comparison, so ties deterministically resolve to the earlier entry.
    fn fuzzy_match(&self, tag: &str) -> Option<(&'static str, u32)> {
        let mut best_score = 0u32;
        let mut best: Option<&'static str> = None;

        for &(spelling, canonical) in TAXONOMY {
            let score = similarity(tag, spelling);
            if score > best_score {
                best_score = score;
                best = Some(canonical);
            }
        }

        match best {
            Some(canonical) if best_score >= self.fuzzy_threshold => Some((canonical, best_score)),
            _ => None,
        }
    }

    /// Genre-indicating substring present and no vetoing substring.
    fn keyword_match(&self, tag: &str) -> bool {
        GENRE_KEYWORDS.iter().any(|keyword| tag.contains(keyword))
            && !NON_GENRE_KEYWORDS.iter().any(|keyword| tag.contains(keyword))
    }

    /// Genre-like by association: the surrounding tag set names at least two
    /// taxonomy keys, and the tag itself either carries a musical indicator
    /// or touches a genre family.
    fn context_match(&self, tag: &str, all_tags: &[String]) -> bool {
        let known_genres = all_tags
            .iter()
            .filter(|t| self.exact_index.contains_key(t.as_str()))
            .count();
        if known_genres < 2 {
            return false;
        }

        if MUSICAL_INDICATORS.iter().any(|indicator| tag.contains(indicator)) {
            return true;
        }

        GENRE_FAMILIES
            .iter()
            .any(|(_, members)| members.iter().any(|member| tag.contains(member)))
    }
}

/// Normalized Levenshtein ratio scaled to an integer 0-100 score.
pub fn similarity(a: &str, b: &str) -> u32 {
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u32
}
