use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use persistence::GuestStore;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::require_admin;
use crate::routes::{auth, export, guests, health, meta, session};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GuestStore>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, store: Arc<dyn GuestStore>) -> Router {
    let state = AppState {
        store,
        sessions: Arc::new(SessionStore::new()),
        config: Arc::new(config),
    };

    // The form is served from a static host, so any origin may call the
    // public endpoints.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Admin routes; the session must have authenticated with the admin
    // credentials.
    let admin_routes = Router::new()
        .route("/api/v1/guests", get(guests::list_guests))
        .route("/api/v1/guests/:id", delete(guests::delete_guest))
        .route(
            "/api/v1/guests/:id/pending-delete",
            post(guests::request_delete).delete(guests::cancel_delete),
        )
        .route("/api/v1/export/csv", get(export::export_csv))
        .route("/api/v1/export/xlsx", get(export::export_xlsx))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/v1/guests", post(guests::submit_guest))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/session", post(session::create_session))
        .route("/api/v1/session", get(session::get_session))
        .route("/api/v1/session/reset", post(session::reset_session))
        .route("/api/v1/meta/form-options", get(meta::form_options))
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
