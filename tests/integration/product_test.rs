//! Integration tests for product creation and listing.

mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn test_create_product_then_list_with_owner() {
    let app = helpers::TestApp::new().await;
    let owner = app.register("seller@b.com", "secret123").await;

    let created = app
        .request(
            "POST",
            "/products",
            Some(serde_json::json!({
                "title": "Desk Lamp",
                "price": 24.99,
                "owner_id": owner["id"],
            })),
            None,
        )
        .await;

    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["title"], "Desk Lamp");
    assert_eq!(created.body["price"], 24.99);
    assert_eq!(created.body["owner_id"], owner["id"]);

    let listed = app.request("GET", "/products", None, None).await;
    assert_eq!(listed.status, StatusCode::OK);

    let items = listed.body.as_array().unwrap();
    let matching: Vec<_> = items
        .iter()
        .filter(|p| p["id"] == created.body["id"])
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["owner"]["id"], owner["id"]);
    assert_eq!(matching[0]["owner"]["email"], "seller@b.com");
    assert!(matching[0]["owner"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_list_is_empty_initially() {
    let app = helpers::TestApp::new().await;

    let listed = app.request("GET", "/products", None, None).await;

    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body, serde_json::json!([]));
}

#[tokio::test]
async fn test_unknown_owner_lists_without_owner() {
    let app = helpers::TestApp::new().await;

    let created = app
        .request(
            "POST",
            "/products",
            Some(serde_json::json!({
                "title": "Orphan",
                "price": 3,
                "owner_id": Uuid::new_v4(),
            })),
            None,
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);

    let listed = app.request("GET", "/products", None, None).await;
    assert_eq!(listed.body[0]["title"], "Orphan");
    assert!(listed.body[0]["owner"].is_null());
}

#[tokio::test]
async fn test_create_product_rejects_bad_input() {
    let app = helpers::TestApp::new().await;
    let owner_id = Uuid::new_v4();

    let cases = [
        serde_json::json!({ "title": "Lamp", "price": -1.0, "owner_id": owner_id }),
        serde_json::json!({ "title": "", "price": 1.0, "owner_id": owner_id }),
        serde_json::json!({ "title": "   ", "price": 1.0, "owner_id": owner_id }),
        serde_json::json!({ "price": 1.0, "owner_id": owner_id }),
        serde_json::json!({ "title": "Lamp", "price": "cheap", "owner_id": owner_id }),
        serde_json::json!({ "title": "Lamp", "price": 1.0, "owner_id": "seller-7" }),
    ];

    for body in cases {
        let response = app.request("POST", "/products", Some(body.clone()), None).await;
        assert_eq!(
            response.status,
            StatusCode::BAD_REQUEST,
            "expected 400 for {body}"
        );
        assert_eq!(response.body["code"], "VALIDATION");
    }

    let listed = app.request("GET", "/products", None, None).await;
    assert_eq!(listed.body, serde_json::json!([]));
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = helpers::TestApp::new().await;

    let response = app
        .raw_request("POST", "/products", "{\"title\": \"Lamp\",", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid request body");
}
