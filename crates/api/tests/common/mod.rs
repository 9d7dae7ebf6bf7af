//! Common test utilities for integration tests.
//!
//! Tests run against the in-memory store backend, so no external services
//! are needed.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use persistence::MemoryGuestStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wedding_addresses_api::{app::create_app, config::Config, session::SESSION_TOKEN_HEADER};

pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "admin-secret";

/// Test configuration backed by the in-memory store.
pub fn test_config() -> Config {
    Config::load_for_test(&[]).expect("Failed to load test config")
}

/// Build the full application router over a fresh in-memory store.
pub fn create_test_app(config: Config) -> Router {
    create_app(config, Arc::new(MemoryGuestStore::new()))
}

/// A complete, valid submission body.
pub fn valid_guest_json() -> Value {
    json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "email": "jane@example.com",
        "phone": "555-0100",
        "address_line1": "123 Main St",
        "address_line2": "Apt 4",
        "city": "Springfield",
        "state": "IL",
        "zip_code": "62704",
        "country": "USA"
    })
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_request_with_token(
    method: Method,
    uri: &str,
    body: Value,
    token: &str,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(SESSION_TOKEN_HEADER, token)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn request_with_token(method: Method, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(SESSION_TOKEN_HEADER, token)
        .body(Body::empty())
        .unwrap()
}

pub fn request_without_token(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Parse a response body as JSON.
pub async fn parse_response_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}

/// Read a response body as raw bytes.
pub async fn response_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
        .to_vec()
}

/// Log in with the test admin credentials and return the session token.
pub async fn login_admin(app: &Router) -> String {
    let request = json_request(
        Method::POST,
        "/api/v1/auth/login",
        json!({
            "username": TEST_ADMIN_USERNAME,
            "password": TEST_ADMIN_PASSWORD
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    body["token"].as_str().expect("No token in login response").to_string()
}

/// Submit a valid guest record and return the response body.
pub async fn submit_guest(app: &Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/guests", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await
}
