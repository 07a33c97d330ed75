//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{destinations, health, quotes};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Safari Quote API",
        version = "0.1.0",
        description = "Multi-day safari quotation REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Destinations
        destinations::list_destinations,
        destinations::list_locations,
        destinations::list_accommodations,
        // Quotes
        quotes::create_quote,
    ),
    components(
        schemas(
            // Destinations
            destinations::AccommodationQuery,
            destinations::NamesResponse,
            // Quotes
            quotes::CreateQuoteRequest,
            quotes::QuoteResponse,
            crate::models::trip::Stay,
            crate::models::trip::RoomComposition,
            crate::models::trip::ExtraCharge,
            crate::models::quotation::Quotation,
            crate::models::quotation::TripSummary,
            crate::models::quotation::PricingResult,
            crate::models::quotation::DayCostLine,
            crate::models::quotation::VehicleCharge,
            crate::models::quotation::CommissionCharge,
            crate::models::quotation::ItineraryEntry,
            crate::models::quotation::ItineraryOverride,
            crate::models::quotation::QuoteWarning,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "destinations", description = "Destination rate catalogue"),
        (name = "quotes", description = "Trip pricing")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
