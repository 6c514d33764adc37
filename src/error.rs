use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Per-URL failures are recovered by the batch loop; nothing here
/// aborts the process.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid URL (must start with http:// or https://): {0}")]
    InvalidUrl(String),

    #[error("Invalid URL. Did you forget to include 'https://'? ({0})")]
    MissingScheme(String),

    #[error("Error fetching the article: {0}")]
    Fetch(String),

    #[error("No article content could be extracted from {0}")]
    EmptyArticle(String),

    #[error("Unknown prompt catalog entry: {0}")]
    PromptLookup(String),

    #[error("Error during summarization: {0}")]
    Summarization(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
