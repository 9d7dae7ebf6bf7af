//! Middleware for the wedding address API.

pub mod auth;
pub mod logging;

pub use auth::{require_admin, AdminSession};
