//! Admin login and logout.

use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::session::token_from_headers;

/// Request body for admin login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Session token for the `X-Session-Token` header.
    pub token: Uuid,
    pub is_admin: bool,
}

/// Admin login.
///
/// POST /api/v1/auth/login
///
/// Exact match against the configured credentials. A failed attempt leaks
/// nothing about which of the two fields was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if !state
        .config
        .admin
        .check_credentials(&request.username, &request.password)
    {
        tracing::warn!("Failed admin login attempt");
        return Err(ApiError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    let token = state.sessions.create_admin();
    tracing::info!("Admin logged in");

    Ok(Json(LoginResponse {
        token,
        is_admin: true,
    }))
}

/// Logout: removes the session entirely, resetting all its flags.
///
/// POST /api/v1/auth/logout
///
/// Idempotent; an unknown or missing token still succeeds.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = token_from_headers(&headers) {
        state.sessions.remove(token);
    }
    StatusCode::NO_CONTENT
}
