use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use hero_core::{GenerateRequest, HeroRecord, ListRequest};

use super::types::{ApiError, ApiState, HealthResponse};

pub(crate) async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

pub(crate) async fn generate_superhero_name(
    State(state): State<ApiState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<HeroRecord>, ApiError> {
    let record = state.service.create(body).await?;
    Ok(Json(record))
}

pub(crate) async fn get_superhero_names(
    State(state): State<ApiState>,
    Query(query): Query<ListRequest>,
) -> Result<Json<Vec<HeroRecord>>, ApiError> {
    let records = state.service.list(query).await?;
    Ok(Json(records))
}
