//! Integration tests for registration, login, and token resolution.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use uuid::Uuid;

use shopfront_auth::jwt::{JwtDecoder, JwtEncoder};

#[tokio::test]
async fn test_register_returns_public_user() {
    let app = helpers::TestApp::new().await;

    let body = app.register("a@b.com", "secret123").await;

    assert_eq!(body["email"], "a@b.com");
    assert!(body.get("id").is_some());
    assert!(body.get("created_at").is_some());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
    assert!(!body.to_string().contains("secret123"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = helpers::TestApp::new().await;
    app.register("dup@b.com", "secret123").await;

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({ "email": "dup@b.com", "password": "other" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Could not create user");
    assert_eq!(response.body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_register_malformed_input() {
    let app = helpers::TestApp::new().await;

    let missing = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({ "email": "a@b.com" })),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["code"], "VALIDATION");

    let wrong_type = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({ "email": 42, "password": "secret123" })),
            None,
        )
        .await;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);

    let broken = app
        .raw_request("POST", "/auth/register", "{\"email\": ", None)
        .await;
    assert_eq!(broken.status, StatusCode::BAD_REQUEST);

    let blank = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({ "email": "   ", "password": "secret123" })),
            None,
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_ignores_unknown_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(serde_json::json!({
                "email": "extra@b.com",
                "password": "secret123",
                "is_admin": true,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("is_admin").is_none());
}

#[tokio::test]
async fn test_login_token_subject_is_user_id() {
    let app = helpers::TestApp::new().await;
    let user = app.register("a@b.com", "secret123").await;

    let token = app.login("a@b.com", "secret123").await;
    assert!(!token.is_empty());

    let claims = JwtDecoder::from_secret(helpers::TEST_SECRET.as_bytes())
        .validate(&token)
        .unwrap();
    assert_eq!(claims.sub.to_string(), user["id"].as_str().unwrap());
    assert_eq!(claims.exp - claims.iat, Duration::days(7).num_seconds());
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let app = helpers::TestApp::new().await;
    app.register("a@b.com", "secret123").await;

    let wrong_password = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "email": "a@b.com", "password": "wrong" })),
            None,
        )
        .await;

    let unknown_email = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "email": "ghost@b.com", "password": "secret123" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["error"], "Invalid email or password");
    assert_eq!(wrong_password.body["code"], "INVALID_CREDENTIALS");
    assert_eq!(wrong_password.status, unknown_email.status);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_login_malformed_input() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({ "password": "secret123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_with_valid_token() {
    let app = helpers::TestApp::new().await;
    let user = app.register("me@b.com", "secret123").await;
    let token = app.login("me@b.com", "secret123").await;

    let response = app.request("GET", "/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], user["id"]);
    assert_eq!(response.body["email"], "me@b.com");
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_me_without_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_me_rejects_bad_tokens() {
    let app = helpers::TestApp::new().await;
    app.register("a@b.com", "secret123").await;

    let expired = JwtEncoder::from_secret(helpers::TEST_SECRET.as_bytes(), Duration::days(7))
        .issue_at(Uuid::new_v4(), Utc::now() - Duration::days(8), Duration::days(7))
        .unwrap()
        .token;

    let foreign = JwtEncoder::from_secret(b"someone-else", Duration::days(7))
        .issue_session(Uuid::new_v4())
        .unwrap()
        .token;

    for token in [expired.as_str(), foreign.as_str(), "garbage"] {
        let response = app.request("GET", "/auth/me", None, Some(token)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "Invalid or expired token");
        assert_eq!(response.body["code"], "AUTHENTICATION");
    }
}

#[tokio::test]
async fn test_me_for_unknown_subject() {
    let app = helpers::TestApp::new().await;

    let token = JwtEncoder::from_secret(helpers::TEST_SECRET.as_bytes(), Duration::days(7))
        .issue_session(Uuid::new_v4())
        .unwrap()
        .token;

    let response = app.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "connected");
}
