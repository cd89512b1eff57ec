use axum::{
    Router,
    routing::{any, get},
};

use fingerflex_core::error::not_found;
use fingerflex_core::health::{healthz, readyz};
use fingerflex_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::angle::get_angles;

pub const ANGLES_PATH: &str = "/";

pub fn build_router() -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Angles: method check happens in the handler so rejections carry a JSON body
        .route(ANGLES_PATH, any(get_angles))
        .fallback(not_found)
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
}
