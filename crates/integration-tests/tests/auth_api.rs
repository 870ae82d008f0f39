//! Login proxy tests, with a stub upstream auth server on loopback.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use shoplytix_integration_tests::{
    STUB_PASSWORD, TestClient, spawn_failing_auth, spawn_stub_auth,
};

#[tokio::test]
async fn empty_fields_are_rejected_locally() {
    // Unreachable endpoint: a validation failure must not touch the network
    let mut client = TestClient::new();

    let (status, body) = client
        .post("/api/auth/login", &json!({"email": "", "password": ""}))
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Please enter both email and password.");

    let (status, _) = client
        .post(
            "/api/auth/login",
            &json!({"email": "owner@store.ph", "password": "   "}),
        )
        .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn successful_login_round_trips_through_upstream() {
    let endpoint = spawn_stub_auth().await;
    let mut client = TestClient::with_auth_endpoint(endpoint);

    let (status, body) = client
        .post(
            "/api/auth/login",
            &json!({"email": "owner@store.ph", "password": STUB_PASSWORD}),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn upstream_rejection_is_401_with_upstream_message() {
    let endpoint = spawn_stub_auth().await;
    let mut client = TestClient::with_auth_endpoint(endpoint);

    let (status, body) = client
        .post(
            "/api/auth/login",
            &json!({"email": "owner@store.ph", "password": "wrong"}),
        )
        .await;
    assert_eq!(status, 401);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn upstream_failure_is_502_with_generic_message() {
    let endpoint = spawn_failing_auth().await;
    let mut client = TestClient::with_auth_endpoint(endpoint);

    let (status, body) = client
        .post(
            "/api/auth/login",
            &json!({"email": "owner@store.ph", "password": STUB_PASSWORD}),
        )
        .await;
    assert_eq!(status, 502);
    assert_eq!(
        body["error"],
        "Network request failed. Please check your connection."
    );
}

#[tokio::test]
async fn unreachable_endpoint_is_502() {
    let mut client = TestClient::new();

    let (status, _) = client
        .post(
            "/api/auth/login",
            &json!({"email": "owner@store.ph", "password": "anything"}),
        )
        .await;
    assert_eq!(status, 502);
}

#[tokio::test]
async fn logout_drops_the_session_and_its_cart() {
    let endpoint = spawn_stub_auth().await;
    let mut client = TestClient::with_auth_endpoint(endpoint);

    client
        .post(
            "/api/auth/login",
            &json!({"email": "owner@store.ph", "password": STUB_PASSWORD}),
        )
        .await;
    client
        .post("/api/cart/add", &json!({"prod_code": "bev001"}))
        .await;

    let (status, body) = client.post("/api/auth/logout", &json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let (_, cart) = client.get("/api/cart").await;
    assert!(cart["lines"].as_array().unwrap().is_empty());
}
