//! Priced quotation model (cost lines, totals, itinerary)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Cost of one night of the pricing walk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayCostLine {
    pub date: NaiveDate,
    /// Zero-based index of the stay the night belongs to
    pub stay: usize,
    pub property: String,
    pub location: String,
    /// Human readable room/rate breakdown, e.g. `1D (2 Pax x $100)`
    pub rooms: String,
    pub accommodation_cost: Decimal,
    pub park_fee_rate: Decimal,
    pub park_fee_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleCharge {
    pub rate_per_day: Decimal,
    /// Calendar days, start and end inclusive
    pub days: u32,
    pub vehicles: u32,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommissionCharge {
    pub rate_per_person: Decimal,
    pub travelers: u32,
    pub total: Decimal,
}

/// Itemized pricing breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PricingResult {
    pub lines: Vec<DayCostLine>,
    pub accommodation_total: Decimal,
    pub park_fee_total: Decimal,
    pub vehicle: VehicleCharge,
    pub commission: CommissionCharge,
    pub extras_total: Decimal,
    pub grand_total: Decimal,
    pub per_person: Decimal,
}

/// One row of the day-by-day itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItineraryEntry {
    /// 1-based day number
    pub day: u32,
    pub date: NaiveDate,
    pub from: String,
    pub to: String,
    pub activities: String,
    pub accommodation: String,
    pub meal_plan: String,
}

/// Caller correction to a generated itinerary entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItineraryOverride {
    pub day: u32,
    pub from: Option<String>,
    pub to: Option<String>,
    pub activities: Option<String>,
    pub accommodation: Option<String>,
    pub meal_plan: Option<String>,
}

/// Non-blocking issue found while pricing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuoteWarning {
    /// Fewer vehicles than seats required for the group
    InsufficientVehicles { required: u32, provided: u32 },
}

impl std::fmt::Display for QuoteWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteWarning::InsufficientVehicles { required, provided } => write!(
                f,
                "Minimum {} vehicles required, {} provided",
                required, provided
            ),
        }
    }
}

/// Trip parameters echoed on the quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub nights: u32,
    pub travelers: u32,
    pub vehicles: u32,
}

/// Full engine output for one trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Quotation {
    pub id: Uuid,
    pub destination: String,
    pub trip: TripSummary,
    pub pricing: PricingResult,
    pub itinerary: Vec<ItineraryEntry>,
    pub warnings: Vec<QuoteWarning>,
}
