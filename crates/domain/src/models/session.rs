//! Ephemeral per-session state.
//!
//! Tracks login and form-submission flow for one caller. Held in memory by
//! the API session store and never persisted.

use serde::Serialize;
use std::collections::BTreeSet;

/// Request/session-scoped flags exposed to the presentation layer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionState {
    /// Whether this session authenticated as the admin.
    pub is_admin: bool,
    /// Set right after a successful form submission; drives the success
    /// screen until the caller resets the form.
    pub form_just_submitted: bool,
    /// First name from the last successful submission, for the greeting.
    pub last_submitted_name: String,
    /// Record ids with a delete confirmation pending. Cleared by confirm
    /// or cancel.
    pub pending_delete: BTreeSet<i64>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a successful submission.
    pub fn record_submission(&mut self, first_name: &str) {
        self.form_just_submitted = true;
        self.last_submitted_name = first_name.to_string();
    }

    /// "Submit Another Address": clears the submission flags, keeps login.
    pub fn reset_form(&mut self) {
        self.form_just_submitted = false;
        self.last_submitted_name.clear();
    }

    /// A delete click: flags the record until confirmed or cancelled.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete.insert(id);
    }

    /// Confirm or cancel clears the flag. Clearing an unflagged id is a no-op.
    pub fn clear_pending_delete(&mut self, id: i64) {
        self.pending_delete.remove(&id);
    }

    pub fn is_pending_delete(&self, id: i64) -> bool {
        self.pending_delete.contains(&id)
    }
}
