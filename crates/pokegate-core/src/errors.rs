//! Error types shared by every pokegate crate.
//!
//! - [`AuthError`]: the authentication/session taxonomy. Each variant knows the
//!   HTTP status it maps to, while its `Display` text stays generic so that no
//!   verification internals leak to clients.
//! - [`AppError`]: the single error type returned by HTTP handlers. It carries a
//!   status code and an [`anyhow::Error`] and renders as `{"message": "..."}`.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Failures of the login / token / refresh protocol.
///
/// `MalformedOrInvalidSignature` and `ExpiredToken` render the same message on
/// purpose; the variant is kept apart for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid or expired token")]
    MalformedOrInvalidSignature,

    #[error("Invalid or expired token")]
    ExpiredToken,

    #[error("Invalid refresh token")]
    SubjectMismatch,

    #[error("Refresh token required")]
    MissingRefreshToken,

    #[error("Invalid refresh token")]
    UnregisteredRefreshToken,

    /// Signing failed. Never expected with HMAC keys, but not unreachable.
    #[error("Failed to create token: {0}")]
    TokenCreation(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingRefreshToken => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::MalformedOrInvalidSignature
            | AuthError::ExpiredToken
            | AuthError::SubjectMismatch
            | AuthError::UnregisteredRefreshToken => StatusCode::FORBIDDEN,
            AuthError::TokenCreation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable identifier used as a structured log field.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::MissingToken => "missing_token",
            AuthError::MalformedOrInvalidSignature => "malformed_or_invalid_signature",
            AuthError::ExpiredToken => "expired_token",
            AuthError::SubjectMismatch => "subject_mismatch",
            AuthError::MissingRefreshToken => "missing_refresh_token",
            AuthError::UnregisteredRefreshToken => "unregistered_refresh_token",
            AuthError::TokenCreation(_) => "token_creation",
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    /// The underlying [`AuthError`], if this error came from the auth protocol.
    pub fn auth_error(&self) -> Option<&AuthError> {
        self.error.downcast_ref::<AuthError>()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        tracing::debug!(reason = err.reason(), status = %err.status(), "auth rejected");
        Self::new(err.status(), err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = if self.status.is_server_error() {
            tracing::error!(error = %self.error, "internal error");
            "Internal server error".to_string()
        } else {
            self.error.to_string()
        };

        let body = Json(json!({ "message": message }));

        (self.status, body).into_response()
    }
}
