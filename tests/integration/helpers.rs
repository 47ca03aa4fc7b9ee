//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use shopfront_api::AppState;
use shopfront_core::config::AppConfig;
use shopfront_database::provider::StoreManager;

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

const TEST_CONFIG: &str = r#"
[database]
provider = "memory"

[auth]
jwt_secret = "integration-test-secret"
token_ttl_hours = 168
hash_memory_kib = 8
hash_iterations = 1
hash_parallelism = 1

[logging]
level = "warn"
format = "pretty"
"#;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by an empty in-memory store
    pub async fn new() -> Self {
        let config = AppConfig::from_toml_str(TEST_CONFIG).expect("Failed to parse test config");
        config.validate().expect("Test config is invalid");

        let stores = StoreManager::connect(&config.database)
            .await
            .expect("Failed to init store");

        let state = AppState::new(config.clone(), stores).expect("Failed to build state");
        let router = shopfront_api::build_app(state);

        Self { router, config }
    }

    /// Register a user and return the response body
    pub async fn register(&self, email: &str, password: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/auth/register",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );

        response.body
    }

    /// Login and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request with an optional JSON body
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, body_str, token).await
    }

    /// Make an HTTP request with a verbatim JSON body
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: impl Into<String>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body.into()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
