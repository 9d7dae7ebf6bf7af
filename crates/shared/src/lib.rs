//! Shared utilities for the wedding address backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Form field validation helpers
//! - The fixed US-state code set served to the guest form

pub mod us_states;
pub mod validation;
