//! Integration tests for guest submission, listing, and deletion.
//!
//! Run against the in-memory store backend; no external services required.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_test_app, json_request, login_admin, parse_response_body, request_with_token,
    request_without_token, submit_guest, test_config, valid_guest_json,
};
use serde_json::json;
use tower::ServiceExt;

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
async fn test_submit_valid_guest() {
    let app = create_test_app(test_config());

    let body = submit_guest(&app, valid_guest_json()).await;

    assert_eq!(
        body["message"],
        "Thank you! Your address has been submitted successfully."
    );
    assert_eq!(body["guest"]["first_name"], "Jane");
    assert_eq!(body["guest"]["state"], "IL");
    assert_eq!(body["guest"]["rsvp_status"], "Pending");
    assert!(body["guest"]["id"].as_i64().unwrap() >= 1);
    assert!(body["guest"]["submission_date"].is_string());
}

#[tokio::test]
async fn test_submit_minimal_guest_applies_defaults() {
    let app = create_test_app(test_config());

    let body = submit_guest(
        &app,
        json!({
            "first_name": "Bob",
            "last_name": "Smith",
            "address_line1": "9 Elm St",
            "city": "Austin",
            "state": "TX",
            "zip_code": "73301"
        }),
    )
    .await;

    assert_eq!(body["guest"]["country"], "USA");
    assert_eq!(body["guest"]["rsvp_status"], "Pending");
    assert!(body["guest"]["email"].is_null());
    assert!(body["guest"]["phone"].is_null());
}

#[tokio::test]
async fn test_submit_reports_all_errors_at_once() {
    let app = create_test_app(test_config());

    // first_name blank, zip missing entirely
    let request = json_request(
        Method::POST,
        "/api/v1/guests",
        json!({
            "first_name": "   ",
            "last_name": "Doe",
            "address_line1": "123 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip_code": ""
        }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], "First name is required");
    assert_eq!(errors[1], "ZIP code is required");

    // Nothing was stored
    let token = login_admin(&app).await;
    let response = app
        .clone()
        .oneshot(request_with_token(Method::GET, "/api/v1/guests", &token))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_submit_rejects_malformed_email() {
    let app = create_test_app(test_config());

    let mut guest = valid_guest_json();
    guest["email"] = json!("not-an-email");

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/guests", guest))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors[0], "Please enter a valid email address");
}

#[tokio::test]
async fn test_submit_accepts_blank_email() {
    let app = create_test_app(test_config());

    let mut guest = valid_guest_json();
    guest["email"] = json!("  ");

    let body = submit_guest(&app, guest).await;
    assert!(body["guest"]["email"].is_null());
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_requires_admin() {
    let app = create_test_app(test_config());

    // No token at all
    let response = app
        .clone()
        .oneshot(request_without_token(Method::GET, "/api/v1/guests"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A plain (non-admin) session
    let response = app
        .clone()
        .oneshot(request_without_token(Method::POST, "/api/v1/session"))
        .await
        .unwrap();
    let token = parse_response_body(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(request_with_token(Method::GET, "/api/v1/guests", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_is_newest_first_with_summary() {
    let app = create_test_app(test_config());

    let mut first = valid_guest_json();
    first["first_name"] = json!("First");
    submit_guest(&app, first).await;

    let mut second = valid_guest_json();
    second["first_name"] = json!("Second");
    second["state"] = json!("TX");
    submit_guest(&app, second).await;

    let token = login_admin(&app).await;
    let response = app
        .clone()
        .oneshot(request_with_token(Method::GET, "/api/v1/guests", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["states_represented"], 2);

    let guests = body["guests"].as_array().unwrap();
    assert_eq!(guests[0]["first_name"], "Second");
    assert_eq!(guests[1]["first_name"], "First");
}

#[tokio::test]
async fn test_states_summary_counts_only_us_codes() {
    let app = create_test_app(test_config());

    submit_guest(&app, valid_guest_json()).await;

    // Same state again: still one distinct state.
    submit_guest(&app, valid_guest_json()).await;

    // A Canadian address; its province is not a US state code.
    let mut canadian = valid_guest_json();
    canadian["state"] = json!("Ontario");
    canadian["country"] = json!("Canada");
    submit_guest(&app, canadian).await;

    let token = login_admin(&app).await;
    let response = app
        .clone()
        .oneshot(request_with_token(Method::GET, "/api/v1/guests", &token))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["states_represented"], 1);
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = create_test_app(test_config());
    let token = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(request_with_token(Method::GET, "/api/v1/guests", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["states_represented"], 0);
    assert!(body["guests"].as_array().unwrap().is_empty());
}

// ============================================================================
// Deletion Tests
// ============================================================================

#[tokio::test]
async fn test_delete_flow_with_confirmation() {
    let app = create_test_app(test_config());

    let body = submit_guest(&app, valid_guest_json()).await;
    let id = body["guest"]["id"].as_i64().unwrap();

    let token = login_admin(&app).await;

    // Flag the record for deletion
    let response = app
        .clone()
        .oneshot(request_with_token(
            Method::POST,
            &format!("/api/v1/guests/{id}/pending-delete"),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let session = parse_response_body(response).await;
    assert_eq!(session["pending_delete"].as_array().unwrap().len(), 1);

    // Confirm: delete the record
    let response = app
        .clone()
        .oneshot(request_with_token(
            Method::DELETE,
            &format!("/api/v1/guests/{id}"),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The record is gone and the pending flag is cleared
    let response = app
        .clone()
        .oneshot(request_with_token(Method::GET, "/api/v1/guests", &token))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 0);

    let response = app
        .clone()
        .oneshot(request_with_token(Method::GET, "/api/v1/session", &token))
        .await
        .unwrap();
    let session = parse_response_body(response).await;
    assert!(session["pending_delete"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_pending_delete_keeps_record() {
    let app = create_test_app(test_config());

    let body = submit_guest(&app, valid_guest_json()).await;
    let id = body["guest"]["id"].as_i64().unwrap();

    let token = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(request_with_token(
            Method::POST,
            &format!("/api/v1/guests/{id}/pending-delete"),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Cancel instead of confirming
    let response = app
        .clone()
        .oneshot(request_with_token(
            Method::DELETE,
            &format!("/api/v1/guests/{id}/pending-delete"),
            &token,
        ))
        .await
        .unwrap();
    let session = parse_response_body(response).await;
    assert!(session["pending_delete"].as_array().unwrap().is_empty());

    let response = app
        .clone()
        .oneshot(request_with_token(Method::GET, "/api/v1/guests", &token))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_delete_missing_id_is_idempotent() {
    let app = create_test_app(test_config());
    let token = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(request_with_token(
            Method::DELETE,
            "/api/v1/guests/9999",
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_requires_admin() {
    let app = create_test_app(test_config());

    let response = app
        .clone()
        .oneshot(request_without_token(Method::DELETE, "/api/v1/guests/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
