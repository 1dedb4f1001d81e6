//! Error types for reqcurl

use thiserror::Error;

/// Main error type for reqcurl
#[derive(Error, Debug)]
pub enum ReqcurlError {
    /// Input text does not begin with the `curl` command name
    #[error("Invalid cURL command: must start with \"curl\"")]
    MissingCommandPrefix,

    /// A quoted argument ran to the end of the input
    #[error("Unclosed quote in cURL command")]
    UnclosedQuote,

    /// No URL-like token anywhere in the command
    #[error("Invalid cURL command: URL is required")]
    MissingUrl,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, ReqcurlError>;
