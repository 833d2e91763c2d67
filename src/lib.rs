//! # Pokegate
//!
//! A small axum server demonstrating JWT authentication with one hardcoded
//! user (`Sacha` / `passwordPokedex123`).
//!
//! ## Variants
//!
//! - **pair** (default): `/login` returns an access token and a refresh token.
//!   `/refresh` trades an active refresh token for a new access token and
//!   `/logout` revokes it.
//! - **single**: `/login` returns one access token; only `/profile` exists.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── pokegate-core/    # AppError, AuthError
//! ├── pokegate-config/  # JwtConfig, CorsConfig, ServerConfig, SessionConfig
//! └── pokegate-auth/    # credential store, claims, jwt, refresh token registry
//! src/
//! ├── middleware/       # AuthUser bearer token extractor
//! ├── modules/
//! │   ├── session/      # login, refresh, logout
//! │   └── resources/    # /profile, /test-data
//! ├── logging.rs        # subscriber setup and request logging
//! ├── router.rs         # route table and CORS
//! ├── state.rs          # AppState
//! └── validator.rs      # ValidatedJson extractor
//! ```
//!
//! ## Tokens
//!
//! - **Access Token**: signed with `JWT_SECRET`, default lifetime 1 hour,
//!   claims `sub`, `username`, `role`
//! - **Refresh Token**: signed with `JWT_REFRESH_SECRET`, default lifetime
//!   7 days, claims `sub` and a random `jti`
//!
//! ### Environment Variables
//!
//! ```bash
//! PORT=3000
//! JWT_SECRET=your-access-secret
//! JWT_REFRESH_SECRET=your-refresh-secret
//! JWT_ACCESS_EXPIRY=3600
//! JWT_REFRESH_EXPIRY=604800
//! REFRESH_TOKEN_POLICY=reuse   # or rotate
//! ALLOWED_ORIGINS=http://localhost:5174
//! ```
//!
//! ## Security Considerations
//!
//! - The password is stored and compared in plaintext; this is a demo
//! - Builds without the `demo-defaults` feature refuse to start without secrets
//! - Refresh tokens live in process memory and are lost on restart

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use pokegate_auth;
pub use pokegate_config;
pub use pokegate_core;
