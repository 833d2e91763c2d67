use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use pokegate_auth::{AccessTokenClaims, Role, verify_access_token};
use pokegate_core::{AppError, AuthError};

use crate::state::AppState;

/// Extractor that validates the bearer access token and provides its claims.
///
/// A missing `Authorization` header is a 401; a header that is present but
/// does not carry a valid, unexpired access token is a 403.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AccessTokenClaims);

impl AuthUser {
    pub fn user_id(&self) -> u64 {
        self.0.sub
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = verify_access_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

/// Pulls the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;

    value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MalformedOrInvalidSignature)
}
