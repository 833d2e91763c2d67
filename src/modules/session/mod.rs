//! Session protocol: login, refresh and logout.
//!
//! Refresh tokens move through Issued → Active → Revoked | Expired. A token
//! is registered at login, removed at logout (or replaced, under the rotate
//! policy, at refresh), and dropped by the sweeper once it has expired.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
