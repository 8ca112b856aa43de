use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::mock_app::{MockApp, read_json};

fn register_request(cookie: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri("/devices")
        .method(Method::POST)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_register_and_list_devices() {
    let app = MockApp::new().await;
    let cookie = app.signup("alice", "alice@test.com", "password123").await;

    let request = register_request(
        &cookie,
        json!({"device_id": "esp32-01", "name": "Living room sensor"}),
    );
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/devices")
        .method(Method::GET)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let devices = read_json(response).await;
    assert_eq!(devices.as_array().unwrap().len(), 1);
    assert_eq!(devices[0]["device_id"], json!("esp32-01"));
    assert_eq!(devices[0]["name"], json!("Living room sensor"));
}

#[tokio::test]
async fn test_device_id_is_globally_unique() {
    let app = MockApp::new().await;
    let alice = app.signup("alice", "alice@test.com", "password123").await;
    let bob = app.signup("bob", "bob@test.com", "password123").await;

    let request = register_request(&alice, json!({"device_id": "esp32-01", "name": "Alice's"}));
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Same device_id under another account is still a collision.
    let request = register_request(&bob, json!({"device_id": "esp32-01", "name": "Bob's"}));
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_is_scoped_to_the_caller() {
    let app = MockApp::new().await;
    let alice = app.signup("alice", "alice@test.com", "password123").await;
    let bob = app.signup("bob", "bob@test.com", "password123").await;

    let request = register_request(&alice, json!({"device_id": "esp32-01", "name": "Alice's"}));
    app.router.clone().oneshot(request).await.unwrap();

    let request = Request::builder()
        .uri("/devices")
        .method(Method::GET)
        .header(header::COOKIE, bob)
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(read_json(response).await, json!([]));
}

#[tokio::test]
async fn test_delete_device() {
    let app = MockApp::new().await;
    let cookie = app.signup("alice", "alice@test.com", "password123").await;

    let request = register_request(&cookie, json!({"device_id": "esp32-01", "name": "Sensor"}));
    app.router.clone().oneshot(request).await.unwrap();

    let request = Request::builder()
        .uri("/devices/esp32-01")
        .method(Method::DELETE)
        .header(header::COOKIE, cookie.clone())
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/devices")
        .method(Method::GET)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(read_json(response).await, json!([]));
}

#[tokio::test]
async fn test_delete_another_users_device_is_not_found() {
    let app = MockApp::new().await;
    let alice = app.signup("alice", "alice@test.com", "password123").await;
    let bob = app.signup("bob", "bob@test.com", "password123").await;

    let request = register_request(&alice, json!({"device_id": "esp32-01", "name": "Alice's"}));
    app.router.clone().oneshot(request).await.unwrap();

    let request = Request::builder()
        .uri("/devices/esp32-01")
        .method(Method::DELETE)
        .header(header::COOKIE, bob)
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_device_routes_require_a_session() {
    let app = MockApp::new().await;

    let request = Request::builder()
        .uri("/devices")
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .uri("/devices")
        .method(Method::POST)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"device_id": "esp32-01", "name": "Sensor"}).to_string(),
        ))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
