//! Rate rows as tabulated per destination (accommodation, park fees, vehicle, commission)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Room occupancy type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Triple,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Single, RoomType::Double, RoomType::Triple];

    /// Number of travelers one room of this type houses
    pub fn capacity(self) -> u32 {
        match self {
            RoomType::Single => 1,
            RoomType::Double => 2,
            RoomType::Triple => 3,
        }
    }

    /// One-letter code used in breakdown lines (`1S`, `2D`, ...)
    pub fn code(self) -> char {
        match self {
            RoomType::Single => 'S',
            RoomType::Double => 'D',
            RoomType::Triple => 'T',
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Triple => "triple",
        };
        f.write_str(s)
    }
}

/// Which rate a failed lookup was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "room_type", rename_all = "snake_case")]
pub enum RateKind {
    Accommodation(RoomType),
    ParkFee,
}

impl std::fmt::Display for RateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateKind::Accommodation(room) => write!(f, "{} accommodation rate", room),
            RateKind::ParkFee => f.write_str("park fee"),
        }
    }
}

/// Per-person-per-night rates by occupancy. `None` means the occupancy
/// type is not offered at the property for the period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OccupancyRates {
    pub single: Option<Decimal>,
    pub double: Option<Decimal>,
    pub triple: Option<Decimal>,
}

impl OccupancyRates {
    pub fn get(&self, room: RoomType) -> Option<Decimal> {
        match room {
            RoomType::Single => self.single,
            RoomType::Double => self.double,
            RoomType::Triple => self.triple,
        }
    }

    /// Rate for a room type that is in use. Missing and zero rates are both
    /// treated as data-entry gaps.
    pub fn required(&self, room: RoomType) -> Option<Decimal> {
        self.get(room).filter(|rate| !rate.is_zero())
    }
}

/// Accommodation rate row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccommodationRate {
    pub location: String,
    /// Room category at the property (e.g. "Tented Camp", "Lodge")
    pub room_type: String,
    pub property: String,
    /// First night covered (inclusive)
    pub date_from: NaiveDate,
    /// Last night covered (inclusive)
    pub date_to: NaiveDate,
    #[serde(flatten)]
    pub rates: OccupancyRates,
}

/// Park fee row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParkFee {
    pub location: String,
    /// Traveler category (e.g. "Adult")
    pub category: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    /// Fee per person per night
    pub fee: Decimal,
}

/// Flat vehicle cost per day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleRate {
    pub cost_per_day: Decimal,
}

/// Flat commission charged once per adult
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommissionRate {
    pub per_person: Decimal,
}

/// Raw rate data for one destination, as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateSheet {
    #[serde(default)]
    pub accommodation: Vec<AccommodationRate>,
    #[serde(default)]
    pub park_fees: Vec<ParkFee>,
    #[serde(default)]
    pub vehicle: Vec<VehicleRate>,
    #[serde(default)]
    pub commission: Vec<CommissionRate>,
}

/// Identifies the rate rows of one property offering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct PropertyKey {
    pub location: String,
    pub room_type: String,
    pub property: String,
}

impl AccommodationRate {
    pub fn matches(&self, key: &PropertyKey) -> bool {
        self.location == key.location
            && self.room_type == key.room_type
            && self.property == key.property
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.date_from <= date && date <= self.date_to
    }
}

impl ParkFee {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.date_from <= date && date <= self.date_to
    }
}
