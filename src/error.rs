use thiserror::Error;

#[derive(Debug, Error)]
pub enum JokeError {
    /// The request never produced a complete response.
    #[error("joke service unavailable: {0}")]
    RemoteUnavailable(#[from] reqwest::Error),

    #[error("malformed response from joke service: {0}")]
    MalformedResponse(String),
}
