use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`. Services with no backing dependencies are ready once listening.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
