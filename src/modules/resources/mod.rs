//! Resources that require a valid access token.

pub mod controller;
pub mod model;
pub mod router;
