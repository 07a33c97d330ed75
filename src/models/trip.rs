//! Trip and stay input model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::rate::{PropertyKey, RoomType};

/// Room quantities booked at a stay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoomComposition {
    #[serde(default)]
    pub singles: u32,
    #[serde(default)]
    pub doubles: u32,
    #[serde(default)]
    pub triples: u32,
}

impl RoomComposition {
    pub fn new(singles: u32, doubles: u32, triples: u32) -> Self {
        Self { singles, doubles, triples }
    }

    /// Number of rooms of the given type
    pub fn count(&self, room: RoomType) -> u32 {
        match room {
            RoomType::Single => self.singles,
            RoomType::Double => self.doubles,
            RoomType::Triple => self.triples,
        }
    }

    /// Travelers housed in rooms of the given type
    pub fn pax(&self, room: RoomType) -> u64 {
        u64::from(self.count(room)) * u64::from(room.capacity())
    }

    /// Total travelers housed by this composition. Widened to `u64` so any
    /// `u32` room counts sum without wrapping.
    pub fn occupancy(&self) -> u64 {
        RoomType::ALL.iter().map(|room| self.pax(*room)).sum()
    }

    /// Room types with at least one room booked, in single/double/triple order
    pub fn in_use(&self) -> impl Iterator<Item = RoomType> + '_ {
        RoomType::ALL.into_iter().filter(|room| self.count(*room) > 0)
    }
}

/// A contiguous block of nights at one property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Stay {
    pub location: String,
    pub room_type: String,
    pub property: String,
    #[validate(range(min = 1, message = "A stay must cover at least one night"))]
    pub nights: u32,
    pub rooms: RoomComposition,
}

impl Stay {
    pub fn property_key(&self) -> PropertyKey {
        PropertyKey {
            location: self.location.clone(),
            room_type: self.room_type.clone(),
            property: self.property.clone(),
        }
    }
}

/// Ad-hoc charge added to a quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExtraCharge {
    #[validate(length(min = 1, message = "Charge name is required"))]
    pub name: String,
    pub unit_price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl ExtraCharge {
    /// `None` when the line total exceeds the decimal range
    pub fn total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// A fully-formed trip ready for pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Trip {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub vehicles: u32,
    pub stays: Vec<Stay>,
    #[serde(default)]
    pub extras: Vec<ExtraCharge>,
}

impl Trip {
    /// Nights between start and end (negative when the range is inverted)
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Calendar days, counting both start and end
    pub fn days(&self) -> i64 {
        self.nights() + 1
    }
}
