use axum::response::{IntoResponse, Response};

use fingerflex_core::error::ApiError;

pub const INVALID_METHOD_MESSAGE: &str = "Invalid request method";

/// Angle service error variants.
#[derive(Debug, thiserror::Error)]
pub enum AnglesServiceError {
    #[error("{}", INVALID_METHOD_MESSAGE)]
    InvalidMethod,
}

impl From<AnglesServiceError> for ApiError {
    fn from(err: AnglesServiceError) -> Self {
        match err {
            AnglesServiceError::InvalidMethod => ApiError::MethodNotAllowed(INVALID_METHOD_MESSAGE),
        }
    }
}

impl IntoResponse for AnglesServiceError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
