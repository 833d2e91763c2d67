//! # Pokegate Config
//!
//! Configuration types for the pokegate server, loaded from environment
//! variables:
//!
//! - [`jwt`]: signing secrets and token lifetimes
//! - [`cors`]: allowed browser origins
//! - [`server`]: bind address and which demo variant to serve
//! - [`session`]: refresh token policy and expiry sweeping
//!
//! Every config type also has a `from_lookup` constructor taking a
//! `Fn(&str) -> Option<String>`, which is what the tests use instead of
//! mutating the process environment.
//!
//! # Example
//!
//! ```ignore
//! use pokegate_config::{CorsConfig, JwtConfig, ServerConfig, SessionConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env()?;
//! let session_config = SessionConfig::from_env()?;
//! ```

pub mod cors;
pub mod error;
pub mod jwt;
pub mod server;
pub mod session;
mod vars;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::{ServerConfig, ServerVariant};
pub use session::{RefreshPolicy, SessionConfig};
