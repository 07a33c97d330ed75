//! Destination catalogue endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

/// Accommodation catalogue query
#[derive(Debug, Deserialize, ToSchema)]
pub struct AccommodationQuery {
    /// Location to list accommodation for
    pub location: String,
    /// When set, list the properties offering this room type
    pub room_type: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct NamesResponse {
    pub items: Vec<String>,
}

/// List destinations with rate data
#[utoipa::path(
    get,
    path = "/destinations",
    tag = "destinations",
    responses(
        (status = 200, description = "Destination names", body = NamesResponse)
    )
)]
pub async fn list_destinations(State(state): State<crate::AppState>) -> Json<NamesResponse> {
    Json(NamesResponse {
        items: state.services.destinations.list(),
    })
}

/// List the locations of a destination
#[utoipa::path(
    get,
    path = "/destinations/{name}/locations",
    tag = "destinations",
    params(
        ("name" = String, Path, description = "Destination name")
    ),
    responses(
        (status = 200, description = "Locations offering accommodation", body = NamesResponse),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn list_locations(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<NamesResponse>> {
    let items = state.services.destinations.locations(&name)?;
    Ok(Json(NamesResponse { items }))
}

/// List room types at a location, or properties for a room type
#[utoipa::path(
    get,
    path = "/destinations/{name}/accommodations",
    tag = "destinations",
    params(
        ("name" = String, Path, description = "Destination name"),
        ("location" = String, Query, description = "Location to list accommodation for"),
        ("room_type" = Option<String>, Query, description = "List properties offering this room type")
    ),
    responses(
        (status = 200, description = "Room types or properties", body = NamesResponse),
        (status = 404, description = "Destination or location not found")
    )
)]
pub async fn list_accommodations(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
    Query(query): Query<AccommodationQuery>,
) -> AppResult<Json<NamesResponse>> {
    let items = state.services.destinations.accommodations(
        &name,
        &query.location,
        query.room_type.as_deref(),
    )?;
    Ok(Json(NamesResponse { items }))
}
