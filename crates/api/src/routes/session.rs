//! Anonymous session lifecycle.
//!
//! A session is created before first use of the form; the returned token is
//! echoed back in `X-Session-Token`. The reset endpoint backs the
//! "Submit Another Address" action.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use domain::models::SessionState;
use serde::Serialize;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::session::token_from_headers;

/// Response body for session creation.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: Uuid,
    pub state: SessionState,
}

/// Create a fresh session.
///
/// POST /api/v1/session
pub async fn create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let token = state.sessions.create();
    // A freshly created session always exists.
    let session = state.sessions.get(token).unwrap_or_default();

    (
        StatusCode::CREATED,
        Json(SessionResponse {
            token,
            state: session,
        }),
    )
}

/// Current session state.
///
/// GET /api/v1/session
pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionState>, ApiError> {
    lookup(&state, &headers).map(Json)
}

/// Clears the submission flags so the form can be shown again. Login state
/// is kept.
///
/// POST /api/v1/session/reset
pub async fn reset_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionState>, ApiError> {
    let token = token_from_headers(&headers)
        .ok_or_else(|| ApiError::NotFound("No such session".to_string()))?;

    if !state.sessions.update(token, |s| s.reset_form()) {
        return Err(ApiError::NotFound("No such session".to_string()));
    }

    lookup(&state, &headers).map(Json)
}

fn lookup(state: &AppState, headers: &HeaderMap) -> Result<SessionState, ApiError> {
    token_from_headers(headers)
        .and_then(|token| state.sessions.get(token))
        .ok_or_else(|| ApiError::NotFound("No such session".to_string()))
}
