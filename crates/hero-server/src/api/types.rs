use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use hero_core::{HeroError, HeroService, HeroStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Service shared by all handlers
pub type SharedService = Arc<HeroService<dyn HeroStore>>;

#[derive(Clone)]
pub(crate) struct ApiState {
    pub(crate) service: SharedService,
}

/// Healthcheck body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests
    pub status: String,
    /// Server time when the check ran
    pub timestamp: DateTime<Utc>,
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description
    pub error: String,
}

#[derive(Debug)]
pub(crate) struct ApiError(HeroError);

impl From<HeroError> for ApiError {
    fn from(err: HeroError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            HeroError::Validation(err) => {
                tracing::debug!(error = %err, "Rejected invalid request");
                StatusCode::BAD_REQUEST
            }
            HeroError::Persistence(err) => {
                tracing::error!(error = %err, "Record store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
