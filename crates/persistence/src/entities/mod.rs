//! Database entity definitions.
//!
//! Entities are direct mappings to store rows.

pub mod guest;

pub use guest::GuestEntity;
