use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend rejected the bearer token")]
    Unauthorized,

    #[error("backend replied {status}: {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("backend unreachable: {0}")]
    Unavailable(String),

    #[error("unexpected backend payload: {0}")]
    InvalidPayload(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return BackendError::InvalidPayload(err.to_string());
        }
        BackendError::Unavailable(err.to_string())
    }
}
