//! Guest record routes: public submission plus the admin list, delete, and
//! delete-confirmation endpoints.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Extension, Json,
};
use domain::models::{Guest, SessionState, SubmitGuestRequest};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AdminSession;
use crate::session::token_from_headers;

/// Response body for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    pub guest: Guest,
}

/// Response body for the admin guest list.
#[derive(Debug, Serialize)]
pub struct GuestListResponse {
    /// Total number of records.
    pub total: usize,
    /// Count of distinct US states across all records. Free-text state
    /// values from non-US addresses are not counted.
    pub states_represented: usize,
    pub guests: Vec<Guest>,
}

/// Submit a mailing address.
///
/// POST /api/v1/guests
///
/// Validates the whole form and reports every failure at once; nothing is
/// stored unless all checks pass. When the caller sends a known session
/// token, the session records the submission for the success screen.
pub async fn submit_guest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SubmitGuestRequest>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let messages = request.validation_messages();
    if !messages.is_empty() {
        return Err(ApiError::Validation(messages));
    }

    let guest = state.store.insert(request.into_new_guest()).await?;

    if let Some(token) = token_from_headers(&headers) {
        state
            .sessions
            .update(token, |s| s.record_submission(&guest.first_name));
    }

    tracing::info!(guest_id = guest.id, "Guest address submitted");

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Thank you! Your address has been submitted successfully.".to_string(),
            guest,
        }),
    ))
}

/// List every guest record, newest first.
///
/// GET /api/v1/guests (admin)
pub async fn list_guests(
    State(state): State<AppState>,
) -> Result<Json<GuestListResponse>, ApiError> {
    let guests = state.store.list_all().await?;

    let states: BTreeSet<&str> = guests
        .iter()
        .map(|g| g.state.as_str())
        .filter(|s| shared::us_states::is_us_state(s))
        .collect();

    Ok(Json(GuestListResponse {
        total: guests.len(),
        states_represented: states.len(),
        guests,
    }))
}

/// Delete a guest record.
///
/// DELETE /api/v1/guests/:id (admin)
///
/// Idempotent: deleting an id that no longer exists still succeeds. The
/// session's pending-delete flag for the id is cleared either way.
pub async fn delete_guest(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminSession>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    state
        .sessions
        .update(admin.token, |s| s.clear_pending_delete(id));

    tracing::info!(guest_id = id, "Guest record deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Flag a record for deletion, pending confirmation.
///
/// POST /api/v1/guests/:id/pending-delete (admin)
pub async fn request_delete(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminSession>,
    Path(id): Path<i64>,
) -> Result<Json<SessionState>, ApiError> {
    state.sessions.update(admin.token, |s| s.request_delete(id));
    session_snapshot(&state, admin)
}

/// Cancel a pending deletion. Cancelling an unflagged id is a no-op.
///
/// DELETE /api/v1/guests/:id/pending-delete (admin)
pub async fn cancel_delete(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminSession>,
    Path(id): Path<i64>,
) -> Result<Json<SessionState>, ApiError> {
    state
        .sessions
        .update(admin.token, |s| s.clear_pending_delete(id));
    session_snapshot(&state, admin)
}

fn session_snapshot(state: &AppState, admin: AdminSession) -> Result<Json<SessionState>, ApiError> {
    state
        .sessions
        .get(admin.token)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No such session".to_string()))
}
