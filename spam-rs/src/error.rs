use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid feature dictionary: {0}")]
    InvalidDictionary(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpamError>;
