//! Occupancy, night allocation and vehicle checks gating the pricing walk

use crate::{
    error::{QuoteError, QuoteResult},
    models::{QuoteWarning, Stay, Trip},
};

/// True iff the stay's rooms house exactly `travelers` people
pub fn validate_occupancy(stay: &Stay, travelers: u32) -> bool {
    stay.rooms.occupancy() == u64::from(travelers)
}

pub fn check_occupancy(index: usize, stay: &Stay, travelers: u32) -> QuoteResult<()> {
    if validate_occupancy(stay, travelers) {
        return Ok(());
    }
    Err(QuoteError::OccupancyMismatch {
        stay: index,
        property: stay.property.clone(),
        expected: travelers,
        actual: stay.rooms.occupancy(),
    })
}

pub fn total_nights_assigned(stays: &[Stay]) -> u64 {
    stays.iter().map(|stay| u64::from(stay.nights)).sum()
}

/// Nights still to allocate; negative when over-allocated
pub fn remaining_nights(trip: &Trip) -> i64 {
    let assigned = i64::try_from(total_nights_assigned(&trip.stays)).unwrap_or(i64::MAX);
    trip.nights().saturating_sub(assigned)
}

pub fn check_night_allocation(trip: &Trip) -> QuoteResult<()> {
    let actual = total_nights_assigned(&trip.stays);
    if u64::try_from(trip.nights()).ok() == Some(actual) {
        Ok(())
    } else {
        Err(QuoteError::NightAllocationMismatch {
            expected: trip.nights(),
            actual,
        })
    }
}

pub fn minimum_vehicles(travelers: u32, seats_per_vehicle: u32) -> u32 {
    travelers.div_ceil(seats_per_vehicle.max(1))
}

/// Vehicle shortfall is reported, never enforced
pub fn check_vehicles(trip: &Trip, seats_per_vehicle: u32) -> Option<QuoteWarning> {
    let required = minimum_vehicles(trip.travelers, seats_per_vehicle);
    (trip.vehicles < required).then_some(QuoteWarning::InsufficientVehicles {
        required,
        provided: trip.vehicles,
    })
}

/// Run every blocking check in order: date range, travelers, occupancy of
/// each stay, night allocation.
pub fn validate_trip(trip: &Trip) -> QuoteResult<()> {
    if trip.end_date < trip.start_date {
        return Err(QuoteError::InvalidDateRange {
            start: trip.start_date,
            end: trip.end_date,
        });
    }
    if trip.travelers == 0 {
        return Err(QuoteError::NoTravelers);
    }
    for (index, stay) in trip.stays.iter().enumerate() {
        check_occupancy(index, stay, trip.travelers)?;
    }
    check_night_allocation(trip)
}
