//! Data models for safari quotations

pub mod quotation;
pub mod rate;
pub mod trip;

// Re-export commonly used types
pub use quotation::{
    CommissionCharge, DayCostLine, ItineraryEntry, ItineraryOverride, PricingResult, Quotation,
    QuoteWarning, TripSummary, VehicleCharge,
};
pub use rate::{
    AccommodationRate, CommissionRate, OccupancyRates, ParkFee, PropertyKey, RateKind, RateSheet,
    RoomType, VehicleRate,
};
pub use trip::{ExtraCharge, RoomComposition, Stay, Trip};
