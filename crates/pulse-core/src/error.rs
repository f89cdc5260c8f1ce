use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Classification failed: {0}")]
    Classification(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Trend store error: {0}")]
    TrendStore(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type PulseResult<T> = Result<T, PulseError>;
