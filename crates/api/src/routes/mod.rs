//! Route handlers for the wedding address API.

pub mod auth;
pub mod export;
pub mod guests;
pub mod health;
pub mod meta;
pub mod session;
