use regex::RegexSet;

use crate::error::TagsiftError;
use crate::taxonomy::NON_GENRE_PATTERNS;

/// Rule-based filter rejecting tags that are obviously not genres: decade
/// markers, sentiment words, nationality adjectives, release metadata.
///
/// The pattern library compiles into a single `RegexSet` at construction;
/// rejection is a pure OR over all patterns, so one automaton pass decides
/// each tag.
pub struct NonGenreFilter {
    patterns: RegexSet,
}

impl NonGenreFilter {
    /// Compile the non-genre pattern library.
    ///
    /// Each pattern is anchored to match from the start of the tag only
    /// (not the whole tag) and made case-insensitive.
    pub fn new() -> Result<Self, TagsiftError> {
        let anchored = NON_GENRE_PATTERNS
            .iter()
            .map(|pattern| format!("(?i)^(?:{pattern})"));
        Ok(Self {
            patterns: RegexSet::new(anchored)?,
        })
    }

    /// Whether any non-genre pattern matches the tag.
    pub fn is_non_genre(&self, tag: &str) -> bool {
        self.patterns.is_match(tag)
    }

    /// Keep the subsequence of tags no pattern rejects, preserving order.
    pub fn filter(&self, tags: Vec<String>) -> Vec<String> {
        tags.into_iter()
            .filter(|tag| !self.is_non_genre(tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> NonGenreFilter {
        NonGenreFilter::new().expect("pattern library compiles")
    }

    #[test]
    fn rejects_decade_markers() {
        let f = filter();
        assert!(f.is_non_genre("90s"));
        assert!(f.is_non_genre("80s"));
        assert!(f.is_non_genre("1990s"));
        assert!(f.is_non_genre("2000"));
        assert!(f.is_non_genre("2020"));
    }

    #[test]
    fn rejects_sentiment_and_provenance() {
        let f = filter();
        assert!(f.is_non_genre("seen live"));
        assert!(f.is_non_genre("favorite"));
        assert!(f.is_non_genre("favorites"));
        assert!(f.is_non_genre("my favorite songs"));
        assert!(f.is_non_genre("british"));
        assert!(f.is_non_genre("female vocalists"));
    }

    #[test]
    fn rejects_release_metadata() {
        let f = filter();
        assert!(f.is_non_genre("folklore deluxe version"));
        assert!(f.is_non_genre("remix"));
        assert!(f.is_non_genre("live at wembley"));
        assert!(f.is_non_genre("movie soundtrack"));
    }

    #[test]
    fn content_patterns_match_anywhere() {
        // Most patterns are substring rules: "top" fires inside "laptop".
        let f = filter();
        assert!(f.is_non_genre("laptop"));
        assert!(f.is_non_genre("deep house")); // "ep" substring rule
    }

    #[test]
    fn anchored_patterns_require_full_shape() {
        // "^\d{2}s$" wants exactly two digits then "s".
        let f = filter();
        assert!(!f.is_non_genre("905 blues"));
        assert!(!f.is_non_genre("a90s"));
    }

    #[test]
    fn keeps_genre_like_tags_in_order() {
        let f = filter();
        let tags = vec![
            "2020".to_string(),
            "folk".to_string(),
            "indie folk".to_string(),
            "seen live".to_string(),
            "pop".to_string(),
        ];
        assert_eq!(f.filter(tags), vec!["folk", "indie folk", "pop"]);
    }
}
