//! Admin authentication middleware.
//!
//! Gates the view/export/delete routes on an admin session token. The token
//! is issued by the login route after an exact credential match.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::app::AppState;
use crate::session::token_from_headers;

/// The authenticated admin session, stored in request extensions for
/// downstream handlers.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    pub token: Uuid,
}

/// Middleware for admin-only routes.
///
/// Requires a known `X-Session-Token` whose session authenticated as admin.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = match token_from_headers(req.headers()) {
        Some(token) => token,
        None => return unauthorized_response("Invalid or missing session token"),
    };

    match state.sessions.get(token) {
        Some(session) if session.is_admin => {
            req.extensions_mut().insert(AdminSession { token });
            next.run(req).await
        }
        Some(_) => forbidden_response("Admin access required"),
        None => unauthorized_response("Invalid or missing session token"),
    }
}

/// Helper to create unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthorized",
            "message": message
        })),
    )
        .into_response()
}

/// Helper to create forbidden response.
fn forbidden_response(message: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "error": "forbidden",
            "message": message
        })),
    )
        .into_response()
}
