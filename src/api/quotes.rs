//! Quotation endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{ExtraCharge, ItineraryOverride, Quotation, Stay, Trip},
    quote::validation::minimum_vehicles,
};

/// Create quotation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateQuoteRequest {
    /// First day of the trip (YYYY-MM-DD)
    pub start_date: NaiveDate,
    /// Last day of the trip (YYYY-MM-DD)
    pub end_date: NaiveDate,
    /// Number of adults
    #[validate(range(min = 1, message = "At least one traveler is required"))]
    pub travelers: u32,
    /// Number of vehicles (defaults to the minimum for the group)
    pub vehicles: Option<u32>,
    /// Stays in travel order
    #[validate(length(min = 1, message = "At least one stay is required"), nested)]
    pub stays: Vec<Stay>,
    /// Additional charges
    #[serde(default)]
    #[validate(nested)]
    pub extras: Vec<ExtraCharge>,
    /// Corrections applied to the generated itinerary
    #[serde(default)]
    pub itinerary: Vec<ItineraryOverride>,
}

/// Priced quotation with its text breakdown
#[derive(Serialize, ToSchema)]
pub struct QuoteResponse {
    pub quotation: Quotation,
    /// Plain-text quotation breakdown
    pub report: String,
}

/// Price a trip
#[utoipa::path(
    post,
    path = "/destinations/{name}/quotes",
    tag = "quotes",
    params(
        ("name" = String, Path, description = "Destination name")
    ),
    request_body = CreateQuoteRequest,
    responses(
        (status = 201, description = "Quotation created", body = QuoteResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Destination not found"),
        (status = 422, description = "Trip cannot be priced (dates, occupancy, nights or missing rates)")
    )
)]
pub async fn create_quote(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
    Json(request): Json<CreateQuoteRequest>,
) -> AppResult<(StatusCode, Json<QuoteResponse>)> {
    request.validate()?;

    let seats = state.config.quotation.seats_per_vehicle;
    let trip = Trip {
        start_date: request.start_date,
        end_date: request.end_date,
        travelers: request.travelers,
        vehicles: request
            .vehicles
            .unwrap_or_else(|| minimum_vehicles(request.travelers, seats).max(1)),
        stays: request.stays,
        extras: request.extras,
    };

    let quotation = state
        .services
        .quotes
        .create_quote(&name, &trip, &request.itinerary)?;
    let report = state.services.quotes.render(&quotation);

    Ok((StatusCode::CREATED, Json(QuoteResponse { quotation, report })))
}
