//! # Pokegate Auth
//!
//! The authentication core of pokegate, independent of HTTP:
//!
//! - [`credentials`]: the [`CredentialStore`] lookup trait and the single-user
//!   [`StaticCredentialStore`]
//! - [`claims`]: access and refresh token claim structures
//! - [`jwt`]: token issuance and verification
//! - [`registry`]: the in-memory [`RefreshTokenRegistry`]
//!
//! # Example
//!
//! ```ignore
//! use pokegate_auth::{
//!     CredentialStore, RefreshTokenRegistry, StaticCredentialStore, issue_refresh_token,
//! };
//!
//! let store = StaticCredentialStore::default();
//! let registry = RefreshTokenRegistry::new();
//!
//! let user = store.verify("Sacha", "passwordPokedex123")?;
//! let refresh_token = issue_refresh_token(&user, &jwt_config)?;
//! registry.register(refresh_token.clone());
//! assert!(registry.is_active(&refresh_token));
//! ```

pub mod claims;
pub mod credentials;
pub mod jwt;
pub mod registry;

// Re-export commonly used types at crate root
pub use claims::{AccessTokenClaims, RefreshTokenClaims};
pub use credentials::{CredentialStore, Role, StaticCredentialStore, User};
pub use jwt::{
    issue_access_token, issue_refresh_token, verify, verify_access_token, verify_refresh_token,
};
pub use registry::RefreshTokenRegistry;
