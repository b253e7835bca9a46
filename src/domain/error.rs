use std::io;

use thiserror::Error;

/// Failure of a single search action, surfaced verbatim to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Category input was blank.
    #[error("Please enter a category")]
    EmptyCategory,

    /// Category input is not one of the allowed categories.
    #[error("Invalid category. Please select from the suggestions.")]
    InvalidCategory,

    /// The catalog request failed. Transport, status and decode failures all collapse here.
    #[error("Failed to fetch products")]
    FetchFailed,
}

/// Library-wide error type for prodsearch operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file passed explicitly but not present.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// HTTP request could not be completed.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Catalog answered with a non-success status.
    #[error("API error ({status})")]
    HttpStatus { status: u16 },

    /// Catalog response body could not be decoded.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Search action failed.
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::Search(SearchError::EmptyCategory)
            | AppError::Search(SearchError::InvalidCategory) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_) => io::ErrorKind::NotFound,
            AppError::ParseError { .. } => io::ErrorKind::InvalidData,
            AppError::Transport(_)
            | AppError::HttpStatus { .. }
            | AppError::Prompt(_)
            | AppError::Search(SearchError::FetchFailed) => io::ErrorKind::Other,
        }
    }
}
