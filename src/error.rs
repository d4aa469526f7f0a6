use reqwest::StatusCode;
use thiserror::Error;

/// Failures while talking to the upstream fuel price API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to fuel price api failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("fuel price api responded with status {0}")]
    Status(StatusCode),

    #[error("failed to parse fuel price api response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label used when counting failures.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Request(_) => "request",
            Self::Status(_) => "status",
            Self::Parse(_) => "parse",
        }
    }
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
}
