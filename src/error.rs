use reqwest::StatusCode;
use thiserror::Error;

/// Broad category of a failed fetch, used when rendering errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FetchErrorKind {
    Network,
    MalformedBody,
    MissingField,
}

#[derive(Error, Debug)]
pub enum QuoteFetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("missing pair '{0}' in response")]
    MissingPair(&'static str),

    #[error("missing bid for pair '{0}'")]
    MissingBid(&'static str),

    #[error("invalid bid '{value}' for pair '{pair}'")]
    InvalidBid { pair: &'static str, value: String },
}

impl QuoteFetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            QuoteFetchError::Network(_) | QuoteFetchError::Status(_) => FetchErrorKind::Network,
            QuoteFetchError::MalformedBody(_) => FetchErrorKind::MalformedBody,
            QuoteFetchError::MissingPair(_)
            | QuoteFetchError::MissingBid(_)
            | QuoteFetchError::InvalidBid { .. } => FetchErrorKind::MissingField,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteFetchError>;
