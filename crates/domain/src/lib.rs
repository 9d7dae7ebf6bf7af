//! Domain layer for the wedding address backend.
//!
//! This crate contains:
//! - Domain models (Guest, SubmitGuestRequest, SessionState)
//! - Form validation with deterministic, field-ordered error messages

pub mod models;
