use thiserror::Error;

/// Failures of a single call to the video source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube API error: {status} - {reason}")]
    Status { status: u16, reason: String },

    #[error("Invalid YouTube API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Error)]
pub enum TrendsError {
    /// Upstream or parsing failure in the general trends path. The cause is
    /// logged where it happens and not carried to the caller.
    #[error("Failed to fetch trends")]
    FetchFailed,
}
