use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use crate::backend::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no usable credential in the cookie store")]
    MissingCredential,

    #[error("refresh token was refused: {0}")]
    RefreshRejected(String),

    #[error("auth backend unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("auth backend replied {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("unexpected auth backend payload: {0}")]
    InvalidPayload(String),

    #[error("{0}")]
    BadRequest(String),
}

pub type Result<T, E = SessionError> = std::result::Result<T, E>;

impl SessionError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        SessionError::BadRequest(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            SessionError::MissingCredential | SessionError::RefreshRejected(_) => {
                StatusCode::UNAUTHORIZED
            }
            SessionError::BadRequest(_) => StatusCode::BAD_REQUEST,
            SessionError::UpstreamUnavailable(_)
            | SessionError::Upstream { .. }
            | SessionError::InvalidPayload(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            SessionError::MissingCredential => "MISSING_CREDENTIAL",
            SessionError::RefreshRejected(_) => "REFRESH_REJECTED",
            SessionError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            SessionError::Upstream { .. } => "UPSTREAM_ERROR",
            SessionError::InvalidPayload(_) => "UPSTREAM_INVALID_PAYLOAD",
            SessionError::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

impl From<BackendError> for SessionError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unauthorized => SessionError::Upstream {
                status: StatusCode::UNAUTHORIZED,
                message: "bearer token rejected".to_string(),
            },
            BackendError::Rejected { status, message } => SessionError::Upstream { status, message },
            BackendError::Unavailable(message) => SessionError::UpstreamUnavailable(message),
            BackendError::InvalidPayload(message) => SessionError::InvalidPayload(message),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "ERROR")]
    pub status: &'static str,
    #[schema(example = "REFRESH_REJECTED")]
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "session request failed");
        }

        let body = ErrorBody {
            status: "ERROR",
            code: self.code(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
