//! # Pokegate Core
//!
//! Core error types for the pokegate authentication demo.
//!
//! - [`errors`]: [`AuthError`] taxonomy and the [`AppError`] handler error with
//!   its HTTP response conversion.
//!
//! # Example
//!
//! ```ignore
//! use pokegate_core::{AppError, AuthError};
//!
//! fn check(present: bool) -> Result<(), AppError> {
//!     if !present {
//!         return Err(AuthError::MissingRefreshToken.into());
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::{AppError, AuthError};
