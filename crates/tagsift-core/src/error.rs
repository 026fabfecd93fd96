use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagsiftError {
    #[error("invalid config: {0}")]
    Config(String),

    #[error("pattern compile failed: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
