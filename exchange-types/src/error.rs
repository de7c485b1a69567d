//! Error types for the exchange service.

/// Rate provider failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or a non-200 response from the provider.
    #[error("Failed to fetch exchange rates from the provider: {0}")]
    Network(String),

    /// The provider answered 200 but the body is not a list of rates.
    #[error("Failed to parse exchange rates response: {0}")]
    Parse(String),
}

/// Conversion engine errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    #[error("{0}")]
    InvalidInput(String),

    /// The currency is listed but its rate cannot be divided by.
    #[error("No usable exchange rate for {0}")]
    RateUnavailable(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidInput(msg) => AppError::BadRequest(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        AppError::Internal(err.to_string())
    }
}
