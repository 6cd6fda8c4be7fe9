use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Provider error: {0}")]
    Api(String),

    #[error("Empty price history for {0}")]
    EmptySeries(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DataError {
    /// Transient failures are retried by the fetch loop; anything else is a
    /// programming-contract violation that escapes before any fetch starts.
    pub fn is_transient(&self) -> bool {
        !matches!(self, DataError::InvalidConfig(_))
    }
}
