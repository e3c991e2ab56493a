//! Error handling for the skill compass application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillCompassError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Market data error: {0}")]
    MarketData(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillCompassError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillCompassError {
    fn from(err: anyhow::Error) -> Self {
        SkillCompassError::Processing(err.to_string())
    }
}
