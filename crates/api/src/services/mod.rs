//! Services for the wedding address API.

pub mod export;
