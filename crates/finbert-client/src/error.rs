use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinbertError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<FinbertError> for pulse_core::PulseError {
    fn from(err: FinbertError) -> Self {
        pulse_core::PulseError::Classification(err.to_string())
    }
}

pub type FinbertResult<T> = Result<T, FinbertError>;
