use crate::canonical;
use crate::config::ExtractionConfig;
use crate::error::TagsiftError;
use crate::filter::NonGenreFilter;
use crate::normalize;
use crate::resolver::{GenreResolver, Resolution};

/// Tag-to-genre extraction pipeline.
///
/// Owns the compiled rule filter and the taxonomy index; both are built once
/// at construction and never mutated, so a shared instance is safe to query
/// from multiple threads.
///
/// Flow: clean -> rule filter -> resolve (exact/fuzzy/keyword/context) ->
/// canonicalize + dedup.
pub struct GenreExtractor {
    config: ExtractionConfig,
    filter: NonGenreFilter,
    resolver: GenreResolver,
}

impl Default for GenreExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl GenreExtractor {
    /// Build an extractor with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default()).expect("default config is valid")
    }

    /// Build an extractor from explicit configuration.
    ///
    /// Fails on out-of-range parameters; see [`ExtractionConfig::validate`].
    pub fn with_config(config: ExtractionConfig) -> Result<Self, TagsiftError> {
        config.validate()?;
        let filter = NonGenreFilter::new()?;
        let resolver = GenreResolver::new(config.fuzzy_threshold);
        Ok(Self {
            config,
            filter,
            resolver,
        })
    }

    /// Extract canonical genre names from raw tags.
    ///
    /// Returns an ordered, duplicate-free list; empty input or a tag set
    /// with no genre evidence yields an empty list. Never fails: malformed
    /// tags are silently dropped by the cleaning stage.
    #[tracing::instrument(name = "extract_genres", skip_all, fields(input = tags.len()))]
    pub fn extract_genres(&self, tags: &[String]) -> Vec<String> {
        if tags.is_empty() {
            return Vec::new();
        }

        let cleaned =
            normalize::clean_all(tags, self.config.min_tag_length, self.config.max_tag_length);
        let filtered = self.filter.filter(cleaned);

        let mut genres = Vec::new();
        for tag in &filtered {
            if let Some(genre) = self.resolver.resolve(tag, &filtered).into_genre() {
                genres.push(genre);
            }
        }

        let unique = canonical::dedup(genres);
        tracing::debug!(filtered = filtered.len(), extracted = unique.len(), "extraction complete");
        unique
    }

    /// Resolve a single cleaned tag against the taxonomy, with `all_tags`
    /// (the rest of the cleaned, filtered set) as context. Exposes which
    /// strategy decided the tag.
    pub fn resolve(&self, tag: &str, all_tags: &[String]) -> Resolution {
        self.resolver.resolve(tag, all_tags)
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        let extractor = GenreExtractor::new();
        assert!(extractor.extract_genres(&[]).is_empty());
    }

    #[test]
    fn test_no_genre_evidence() {
        let extractor = GenreExtractor::new();
        let tags = owned(&["seen live", "favorite", "90s"]);
        assert!(extractor.extract_genres(&tags).is_empty());
    }

    #[test]
    fn test_exact_keys_map_to_canonical_form() {
        let extractor = GenreExtractor::new();
        let tags = owned(&["hiphop"]);
        assert_eq!(extractor.extract_genres(&tags), vec!["hip-hop"]);
    }

    #[test]
    fn test_case_and_duplicate_collapse() {
        let extractor = GenreExtractor::new();
        let tags = owned(&["rock", "ROCK", "rock"]);
        assert_eq!(extractor.extract_genres(&tags), vec!["rock"]);
    }

    #[test]
    fn test_non_genre_tags_never_surface() {
        let extractor = GenreExtractor::new();
        let tags = owned(&["90s", "seen live", "favorite", "rock"]);
        let genres = extractor.extract_genres(&tags);
        assert_eq!(genres, vec!["rock"]);
        for genre in &genres {
            assert!(!genre.contains("90s"));
            assert!(!genre.contains("seen"));
            assert!(!genre.contains("favorite"));
        }
    }

    #[test]
    fn test_album_tag_scenario() {
        // A realistic tag set for a folk-pop release: the year and the
        // deluxe-version tag drop out, "alternative" folds to its canonical
        // spelling, and the rest resolve in first-seen order.
        let extractor = GenreExtractor::new();
        let tags = owned(&[
            "2020",
            "folk",
            "folklore (deluxe version)",
            "alternative",
            "folk pop",
            "indie folk",
            "pop",
            "chamber pop",
            "indie",
            "singer-songwriter",
        ]);
        assert_eq!(
            extractor.extract_genres(&tags),
            vec![
                "folk",
                "alternative rock",
                "folk pop",
                "indie folk",
                "pop",
                "chamber pop",
                "indie",
            ]
        );
    }

    #[test]
    fn test_deterministic_across_runs() {
        let extractor = GenreExtractor::new();
        let tags = owned(&["salba", "tecno", "folk pop", "rock", "jazz", "boom bap"]);
        let first = extractor.extract_genres(&tags);
        let second = extractor.extract_genres(&tags);
        assert_eq!(first, second);
    }

    #[test]
    fn test_threshold_boundary_via_config() {
        // "hause" scores exactly 80 against "house".
        let at = GenreExtractor::with_config(ExtractionConfig {
            fuzzy_threshold: 80,
            ..ExtractionConfig::default()
        })
        .unwrap();
        assert_eq!(at.extract_genres(&owned(&["hause"])), vec!["house"]);

        let above = GenreExtractor::with_config(ExtractionConfig {
            fuzzy_threshold: 81,
            ..ExtractionConfig::default()
        })
        .unwrap();
        assert!(above.extract_genres(&owned(&["hause"])).is_empty());
    }

    #[test]
    fn test_unused_weights_do_not_change_output() {
        // keyword_threshold and context_weight are accepted but inert.
        let tags = owned(&["folk", "folk pop", "tecno", "boom bap", "rock", "jazz"]);
        let default = GenreExtractor::new().extract_genres(&tags);
        let tweaked = GenreExtractor::with_config(ExtractionConfig {
            keyword_threshold: 0.0,
            context_weight: 1.0,
            ..ExtractionConfig::default()
        })
        .unwrap()
        .extract_genres(&tags);
        assert_eq!(default, tweaked);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = GenreExtractor::with_config(ExtractionConfig {
            fuzzy_threshold: 200,
            ..ExtractionConfig::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_length_bounds_respected() {
        let extractor = GenreExtractor::with_config(ExtractionConfig {
            min_tag_length: 5,
            ..ExtractionConfig::default()
        })
        .unwrap();
        // "rock" (4 chars) now falls under the minimum.
        assert!(extractor.extract_genres(&owned(&["rock"])).is_empty());
    }
}
