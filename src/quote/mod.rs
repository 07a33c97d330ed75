//! Pricing core: rate lookup, trip validation, pricing walk and reporting
//!
//! Everything here is synchronous and free of I/O.

pub mod engine;
pub mod itinerary;
pub mod money;
pub mod rate_table;
pub mod report;
pub mod validation;

pub use engine::{price_trip, PricedTrip};
pub use rate_table::RateTable;
