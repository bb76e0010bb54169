use thiserror::Error;

/// Failures talking to the remote catalog.
///
/// The resolver turns every one of these into a missing record; they are
/// surfaced only through logs.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Raised by a presentation observer that could not accept an update.
#[derive(Debug, Error)]
#[error("observer rejected update: {0}")]
pub struct ObserverError(pub String);

impl ObserverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failures caught at the aggregation boundaries.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("row {row} aborted: {message}")]
    RowAborted { row: String, message: String },

    #[error("hero resolution aborted: {0}")]
    HeroAborted(String),

    #[error(transparent)]
    Observer(#[from] ObserverError),
}
