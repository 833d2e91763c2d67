//! Token issuance and verification.
//!
//! Both token kinds are HS256 JWTs, each signed with its own secret from
//! [`JwtConfig`]:
//!
//! - **Access tokens** ([`AccessTokenClaims`]): `sub`, `username`, `role`,
//!   valid for `access_token_expiry` seconds
//! - **Refresh tokens** ([`RefreshTokenClaims`]): `sub` and a random `jti`,
//!   valid for `refresh_token_expiry` seconds
//!
//! Verification has no leeway: a token is expired as soon as `exp` is in the
//! past. Failures are classified as [`AuthError::ExpiredToken`] or
//! [`AuthError::MalformedOrInvalidSignature`].
//!
//! # Example
//!
//! ```ignore
//! use pokegate_auth::{issue_access_token, verify_access_token, User};
//! use pokegate_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = issue_access_token(&User::demo(), &config)?;
//! let claims = verify_access_token(&token, &config)?;
//! assert_eq!(claims.username, "Sacha");
//! ```

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use pokegate_config::JwtConfig;
use pokegate_core::AuthError;

use crate::claims::{AccessTokenClaims, RefreshTokenClaims};
use crate::credentials::User;

/// Creates an access token for `user`, signed with the access secret.
pub fn issue_access_token(user: &User, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();

    let claims = AccessTokenClaims {
        sub: user.id,
        username: user.username.clone(),
        role: user.role,
        iat: now,
        exp: expires_at(now, jwt_config.access_token_expiry)?,
    };

    sign(&claims, &jwt_config.access_secret)
}

/// Creates a refresh token for `user`, signed with the refresh secret.
///
/// The token is not registered anywhere; callers that want it to be usable
/// must add it to a [`RefreshTokenRegistry`](crate::RefreshTokenRegistry).
pub fn issue_refresh_token(user: &User, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();

    let claims = RefreshTokenClaims {
        sub: user.id,
        iat: now,
        exp: expires_at(now, jwt_config.refresh_token_expiry)?,
        jti: Uuid::new_v4().to_string(),
    };

    sign(&claims, &jwt_config.refresh_secret)
}

pub fn verify_access_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<AccessTokenClaims, AuthError> {
    verify(token, &jwt_config.access_secret)
}

pub fn verify_refresh_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<RefreshTokenClaims, AuthError> {
    verify(token, &jwt_config.refresh_secret)
}

/// Checks signature and expiry of `token` against `secret` and decodes its claims.
pub fn verify<C>(token: &str, secret: &str) -> Result<C, AuthError>
where
    C: DeserializeOwned,
{
    decode::<C>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        _ => AuthError::MalformedOrInvalidSignature,
    })
}

fn expires_at(now: i64, ttl: i64) -> Result<i64, AuthError> {
    now.checked_add(ttl)
        .ok_or_else(|| AuthError::TokenCreation(format!("token lifetime {ttl}s overflows")))
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation
}

fn sign<C: Serialize>(claims: &C, secret: &str) -> Result<String, AuthError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::TokenCreation(e.to_string()))
}
