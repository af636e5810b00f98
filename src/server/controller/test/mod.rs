use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Sends a single request through a freshly built router.
async fn send(db: &DatabaseConnection, request: Request<Body>) -> Response {
    router(AppState::new(db.clone()))
        .oneshot(request)
        .await
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Tests the OpenAPI document lists the registered paths.
///
/// Expected: 200 with the order status path present
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new()
        .with_kitchen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = send(db, empty_request("GET", "/api/openapi.json")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let document = body_json(response).await;
    assert!(document["paths"]["/api/orders/{order_id}/order-status"].is_object());
    assert!(document["paths"]["/api/table-groups/{table_group_id}"].is_object());
}
