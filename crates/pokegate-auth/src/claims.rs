//! JWT claim structures for the two token kinds.
//!
//! - [`AccessTokenClaims`]: short-lived, carries who the user is and their role
//! - [`RefreshTokenClaims`]: long-lived, carries only the subject

use serde::{Deserialize, Serialize};

use crate::credentials::Role;

/// Claims embedded in access tokens and handed to protected handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// User ID (subject claim)
    pub sub: u64,
    pub username: String,
    pub role: Role,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: i64,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: i64,
}

/// Claims embedded in refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    /// User ID (subject claim)
    pub sub: u64,
    pub iat: i64,
    pub exp: i64,
    /// Unique token identifier so that two logins within the same second
    /// still produce distinct, independently revocable tokens.
    pub jti: String,
}
