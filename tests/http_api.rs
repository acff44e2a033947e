//! Integration tests for the receipt endpoints
//!
//! These drive the router in-process and check the store behind it.

use axum::http::StatusCode;
use axum_test::TestServer;
use receipt_points::{AppState, ReceiptStore, create_router};
use serde_json::{Value, json};
use std::sync::Arc;

/// Create test server, returning the store it writes to
fn create_test_server() -> (TestServer, Arc<ReceiptStore>) {
    let store = Arc::new(ReceiptStore::new());
    let router = create_router(AppState::with_store(Arc::clone(&store)));
    (TestServer::new(router).unwrap(), store)
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

async fn process(server: &TestServer, body: &Value) -> String {
    let response = server.post("/receipts/process").json(body).await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

async fn points(server: &TestServer, id: &str) -> u64 {
    let response = server.get(&format!("/receipts/{id}/points")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["points"].as_u64().unwrap()
}

// ============ Process + Points ============

#[tokio::test]
async fn test_process_then_points() {
    let (server, store) = create_test_server();

    let target = process(&server, &target_receipt()).await;
    let corner = process(&server, &corner_market_receipt()).await;

    assert_ne!(target, corner);
    assert_eq!(points(&server, &target).await, 28);
    assert_eq!(points(&server, &corner).await, 109);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_process_returns_uuid_id() {
    let (server, _store) = create_test_server();

    let id = process(&server, &target_receipt()).await;

    assert!(uuid::Uuid::parse_str(&id).is_ok(), "id {id} is not a UUID");
}

#[tokio::test]
async fn test_points_are_stable_across_reads() {
    let (server, _store) = create_test_server();
    let id = process(&server, &target_receipt()).await;

    for _ in 0..3 {
        assert_eq!(points(&server, &id).await, 28);
    }
}

#[tokio::test]
async fn test_same_receipt_twice_gets_two_ids() {
    let (server, store) = create_test_server();

    let first = process(&server, &target_receipt()).await;
    let second = process(&server, &target_receipt()).await;

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_process_without_content_type() {
    let (server, _store) = create_test_server();

    let response = server.post("/receipts/process").bytes(target_receipt().to_string().into_bytes().into()).await;

    response.assert_status_ok();
    let body: Value = response.json();
    let id = body["id"].as_str().unwrap();
    assert_eq!(points(&server, id).await, 28);
}

#[tokio::test]
async fn test_stored_receipt_keeps_breakdown() {
    let (server, store) = create_test_server();
    let id = process(&server, &corner_market_receipt()).await;

    let stored = store.get(&id).unwrap().unwrap();

    assert_eq!(stored.receipt.retailer, "M&M Corner Market");
    assert_eq!(stored.result.points, 109);
    assert_eq!(stored.result.breakdown.len(), 5);
}

// ============ Validation ============

#[tokio::test]
async fn test_missing_total_is_rejected() {
    let (server, store) = create_test_server();
    let mut body = target_receipt();
    body.as_object_mut().unwrap().remove("total");

    let response = server.post("/receipts/process").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["error"].as_str().unwrap().contains("total"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_invalid_json_is_rejected() {
    let (server, store) = create_test_server();

    let response = server.post("/receipts/process").text("{\"retailer\": \"Target\",").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["code"], "BAD_REQUEST");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_invalid_fields_are_rejected() {
    let (server, store) = create_test_server();

    let cases: Vec<(&str, Value, &str)> = vec![
        ("total", json!("35.355"), "total"),
        ("total", json!(35.35), "total"),
        ("purchaseDate", json!("2022-02-30"), "purchaseDate"),
        ("purchaseTime", json!("25:00"), "purchaseTime"),
        ("items", json!("none"), "items"),
        ("items", json!([{"shortDescription": "Gatorade", "price": "two"}]), "items[0].price"),
        ("items", json!([{"price": "2.25"}]), "items[0].shortDescription"),
        ("retailer", Value::Null, "retailer"),
    ];

    for (field, replacement, mentioned) in cases {
        let mut body = target_receipt();
        body[field] = replacement;

        let response = server.post("/receipts/process").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert_eq!(error["code"], "VALIDATION_ERROR", "field {field}");
        assert!(error["error"].as_str().unwrap().contains(mentioned), "field {field}: {error}");
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let (server, store) = create_test_server();

    let response = server.post("/receipts/process").json(&json!(["Target"])).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(store.is_empty());
}

// ============ Lookup ============

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (server, store) = create_test_server();
    process(&server, &target_receipt()).await;

    let response = server.get(&format!("/receipts/{}/points", uuid::Uuid::new_v4())).await;

    response.assert_status_not_found();
    let error: Value = response.json();
    assert_eq!(error["code"], "NOT_FOUND");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let (server, _store) = create_test_server();

    let response = server.get("/receipts/process").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

// ============ Health ============

#[tokio::test]
async fn test_health_check() {
    let (server, _store) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
