//! Integration tests for the admin review surface.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{pending_submission, TestApp};

#[tokio::test]
async fn test_admin_routes_redirect_anonymous_callers_home() {
    let app = TestApp::new();

    for path in ["/admin/submissions", "/admin/users"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{path}");
        assert_eq!(response.headers["location"], "/");
    }
}

#[tokio::test]
async fn test_admin_routes_redirect_plain_members_home() {
    let app = TestApp::new();
    let token = app.member_token();

    let response = app
        .request("GET", "/admin/submissions", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.headers["location"], "/");
}

#[tokio::test]
async fn test_org_admin_can_list_submissions() {
    let app = TestApp::new();
    app.submissions.seed(pending_submission("Standing Doctrine"));
    let token = app.admin_token();

    let response = app
        .request("GET", "/admin/submissions?status=pending", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let rows = response.body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "pending");
}

#[tokio::test]
async fn test_approve_stamps_reviewer_and_returns_fresh_list() {
    let app = TestApp::new();
    let record = pending_submission("Standing Doctrine");
    let id = record.id;
    app.submissions.seed(record);
    let token = app.admin_token();

    let response = app
        .request(
            "POST",
            &format!("/api/admin/submissions/{id}/approve"),
            Some(json!({})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let rows = response.body["data"].as_array().unwrap();
    assert_eq!(rows[0]["status"], "approved");
    assert_eq!(rows[0]["reviewed_by"], "user_admin@ucla.edu");
    assert!(rows[0]["reviewed_at"].is_string());
}

#[tokio::test]
async fn test_unconfirmed_reject_leaves_status_unchanged() {
    let app = TestApp::new();
    let record = pending_submission("Standing Doctrine");
    let id = record.id;
    app.submissions.seed(record);
    let token = app.admin_token();

    let response = app
        .request(
            "POST",
            &format!("/api/admin/submissions/{id}/reject"),
            Some(json!({ "confirm": false })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.submissions.all()[0].status.to_string(), "pending");
}

#[tokio::test]
async fn test_confirmed_reject_records_decision() {
    let app = TestApp::new();
    let record = pending_submission("Standing Doctrine");
    let id = record.id;
    app.submissions.seed(record);
    let token = app.admin_token();

    let response = app
        .request(
            "POST",
            &format!("/api/admin/submissions/{id}/reject"),
            Some(json!({ "confirm": true, "feedback": "Out of scope" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let updated = &app.submissions.all()[0];
    assert_eq!(updated.status.to_string(), "rejected");
    assert_eq!(updated.feedback.as_deref(), Some("Out of scope"));
}

#[tokio::test]
async fn test_admin_users_lists_membership_directory() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app.request("GET", "/admin/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let rows = response.body["data"].as_array().unwrap();
    assert_eq!(rows[0]["name"], "Ada Alvarez");
    assert_eq!(rows[0]["identifier"], "editor@ucla.edu");
    assert_eq!(rows[0]["role"], "org:admin");
}
