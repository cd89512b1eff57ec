use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::helpers::{expected_angle_set, invalid_method_body, test_server};

// ── GET ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_angle_set_on_get() {
    let server = test_server();

    let resp = server.get("/").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.headers()["content-type"], "application/json");
    assert_eq!(resp.json::<Value>(), expected_angle_set());
}

#[tokio::test]
async fn should_return_identical_responses_on_repeated_get() {
    let server = test_server();

    let first = server.get("/").await;
    let second = server.get("/").await;

    assert_eq!(first.status_code(), second.status_code());
    assert_eq!(first.text(), second.text());
}

#[tokio::test]
async fn should_not_change_get_response_after_rejected_write() {
    let server = test_server();

    let before = server.get("/").await.json::<Value>();
    let _ = server.post("/").json(&serde_json::json!({ "targetAngle": [0] })).await;
    let after = server.get("/").await.json::<Value>();

    assert_eq!(before, after);
    assert_eq!(after, expected_angle_set());
}

#[tokio::test]
async fn should_ignore_query_string() {
    let server = test_server();

    let resp = server.get("/").add_query_param("finger", "thumb").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>(), expected_angle_set());
}

// ── other methods ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_write_methods_with_405() {
    let server = test_server();

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let resp = server.method(method.clone(), "/").await;

        assert_eq!(resp.status_code(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(resp.headers()["content-type"], "application/json", "{method}");
        assert_eq!(resp.json::<Value>(), invalid_method_body(), "{method}");
    }
}

#[tokio::test]
async fn should_reject_head_with_405() {
    let server = test_server();

    let resp = server.method(Method::HEAD, "/").await;

    assert_eq!(resp.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.headers()["content-type"], "application/json");
}

#[tokio::test]
async fn should_reject_options_with_405() {
    let server = test_server();

    let resp = server.method(Method::OPTIONS, "/").await;

    assert_eq!(resp.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.json::<Value>(), invalid_method_body());
}
