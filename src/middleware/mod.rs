//! Middleware and extractors for request processing.
//!
//! - [`auth`]: the [`AuthUser`](auth::AuthUser) bearer token extractor
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` verifies the access token against the access secret
//! 3. Handler executes with the decoded claims
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn get_profile(AuthUser(claims): AuthUser) -> impl IntoResponse {
//!     Json(claims)
//! }
//! ```

pub mod auth;
