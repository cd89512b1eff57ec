use axum_test::TestServer;
use serde_json::{Value, json};

use fingerflex_angles::router::build_router;

pub fn test_server() -> TestServer {
    TestServer::new(build_router()).unwrap()
}

pub fn expected_angle_set() -> Value {
    json!({
        "targetAngle": [45, 90, 135, 180, 45],
        "assistedAngle": [30, 60, 90, 120, 30],
    })
}

pub fn invalid_method_body() -> Value {
    json!({ "error": "Invalid request method" })
}
