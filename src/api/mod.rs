//! API handlers for the quotation REST endpoints

pub mod destinations;
pub mod health;
pub mod openapi;
pub mod quotes;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Destinations
        .route("/destinations", get(destinations::list_destinations))
        .route("/destinations/:name/locations", get(destinations::list_locations))
        .route(
            "/destinations/:name/accommodations",
            get(destinations::list_accommodations),
        )
        // Quotations
        .route("/destinations/:name/quotes", post(quotes::create_quote))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
