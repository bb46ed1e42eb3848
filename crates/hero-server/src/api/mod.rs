//! HTTP API
//!
//! Routes:
//! - `GET  /health`
//! - `POST /api/superhero-names` generate and store a name
//! - `GET  /api/superhero-names?limit=N` most recent names

mod handlers;
mod types;

pub use types::{ErrorBody, HealthResponse, SharedService};

use axum::{
    routing::{get, post},
    Router,
};
use handlers::{generate_superhero_name, get_superhero_names, healthcheck};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use types::ApiState;

/// Build the application router
pub fn build_router(service: SharedService) -> Router {
    let api_routes = Router::new().route(
        "/superhero-names",
        post(generate_superhero_name).get(get_superhero_names),
    );

    Router::new()
        .route("/health", get(healthcheck))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ApiState { service })
}
