use axum::{Json, http::Method};

use crate::domain::angle_set::{ANGLE_SET, AngleSet};
use crate::error::AnglesServiceError;

// ── ANY / ────────────────────────────────────────────────────────────────────

/// Serves the glove's angle set on `GET`; every other method, `HEAD` included,
/// gets a 405. Method tokens are case-sensitive, so `get` is rejected.
pub async fn get_angles(method: Method) -> Result<Json<AngleSet>, AnglesServiceError> {
    if method != Method::GET {
        tracing::warn!(%method, "rejected angle request");
        return Err(AnglesServiceError::InvalidMethod);
    }
    tracing::debug!("serving angle set");
    Ok(Json(ANGLE_SET))
}
