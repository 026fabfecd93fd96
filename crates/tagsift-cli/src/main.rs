mod config;

use std::io::Read as _;
use std::path::PathBuf;

use clap::Parser;
use tagsift_core::{GenreExtractor, TagsiftError};

use crate::config::AppConfig;

/// Extract canonical genre names from free-text music tags.
#[derive(Debug, Parser)]
#[command(name = "tagsift", version, about)]
struct Cli {
    /// Tags to classify. Ignored when --input is given.
    tags: Vec<String>,

    /// Read tags as a JSON array from FILE ("-" reads stdin).
    #[arg(long, value_name = "FILE")]
    input: Option<String>,

    /// Path to a TOML config file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the fuzzy-match acceptance score (0-100).
    #[arg(long, value_name = "SCORE")]
    threshold: Option<u32>,

    /// Emit the result as a JSON array instead of one genre per line.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), TagsiftError> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "tagsift=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app = AppConfig::load(cli.config.as_deref())?;
    if let Some(threshold) = cli.threshold {
        app.extraction.fuzzy_threshold = threshold;
    }

    let tags = match &cli.input {
        Some(source) => read_json_tags(source)?,
        None => cli.tags,
    };

    let extractor = GenreExtractor::with_config(app.extraction)?;
    let genres = extractor.extract_genres(&tags);
    tracing::debug!(tags = tags.len(), genres = genres.len(), "extraction finished");

    if cli.json {
        println!(
            "{}",
            serde_json::to_string(&genres).expect("string list serializes")
        );
    } else {
        for genre in &genres {
            println!("{genre}");
        }
    }

    Ok(())
}

/// Parse a JSON array of tags from a file or stdin.
///
/// Non-string array elements are skipped rather than rejected; tag feeds
/// routinely mix in nulls and numbers.
fn read_json_tags(source: &str) -> Result<Vec<String>, TagsiftError> {
    let payload = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(source)?
    };

    let value: serde_json::Value =
        serde_json::from_str(&payload).map_err(|e| TagsiftError::Input(e.to_string()))?;
    let items = value
        .as_array()
        .ok_or_else(|| TagsiftError::Input("expected a JSON array of tags".into()))?;

    Ok(items
        .iter()
        .filter_map(|item| item.as_str().map(str::to_owned))
        .collect())
}
