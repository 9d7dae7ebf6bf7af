//! Domain models for the wedding address backend.

pub mod guest;
pub mod session;

pub use guest::{Guest, NewGuest, SubmitGuestRequest};
pub use session::SessionState;
