//! Validated, queryable view over one destination's rate rows
//!
//! Lookups match a row when `date_from <= date <= date_to` (plus key
//! equality) and take the first matching row in table order. Overlapping
//! accommodation ranges are reported when the table is built; overlapping
//! park fee ranges are rejected, so at most one park fee row matches.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    error::{QuoteError, QuoteResult, RateTableError},
    models::{
        AccommodationRate, CommissionRate, OccupancyRates, ParkFee, PropertyKey, RateKind,
        RateSheet, RoomType, Stay, VehicleRate,
    },
};

/// Two rows of the same table whose date ranges intersect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateOverlap {
    pub table: &'static str,
    pub subject: String,
    /// Row indexes in table order; the first one wins on lookup
    pub first: usize,
    pub second: usize,
}

#[derive(Debug, Clone)]
pub struct RateTable {
    accommodation: Vec<AccommodationRate>,
    park_fees: Vec<ParkFee>,
    vehicle: VehicleRate,
    commission: CommissionRate,
    overlaps: Vec<RateOverlap>,
}

impl RateTable {
    /// Validate a raw rate sheet
    pub fn from_sheet(sheet: RateSheet) -> Result<Self, RateTableError> {
        let RateSheet { accommodation, park_fees, vehicle, commission } = sheet;

        for (row, rate) in accommodation.iter().enumerate() {
            if rate.date_from > rate.date_to {
                return Err(RateTableError::InvertedRange {
                    table: "accommodation",
                    row,
                    subject: rate.property.clone(),
                    date_from: rate.date_from,
                    date_to: rate.date_to,
                });
            }
        }
        for (row, fee) in park_fees.iter().enumerate() {
            if fee.date_from > fee.date_to {
                return Err(RateTableError::InvertedRange {
                    table: "park fees",
                    row,
                    subject: fee.location.clone(),
                    date_from: fee.date_from,
                    date_to: fee.date_to,
                });
            }
        }

        let vehicle = first_row(vehicle, "vehicle")?;
        let commission = first_row(commission, "commission")?;

        if let Some(overlap) = find_overlaps(
            "park fees",
            &park_fees,
            |a, b| a.location == b.location && a.category == b.category,
            |r| (r.date_from, r.date_to),
            |r| format!("{} / {}", r.location, r.category),
        )
        .into_iter()
        .next()
        {
            return Err(RateTableError::OverlappingRange {
                table: overlap.table,
                subject: overlap.subject,
                first: overlap.first,
                second: overlap.second,
            });
        }

        let overlaps = find_overlaps(
            "accommodation",
            &accommodation,
            |a, b| a.location == b.location && a.room_type == b.room_type && a.property == b.property,
            |r| (r.date_from, r.date_to),
            |r| format!("{} / {} / {}", r.location, r.room_type, r.property),
        );
        for overlap in &overlaps {
            tracing::warn!(
                "Overlapping {} rates for {}: rows {} and {} (row {} wins)",
                overlap.table,
                overlap.subject,
                overlap.first,
                overlap.second,
                overlap.first
            );
        }

        Ok(Self {
            accommodation,
            park_fees,
            vehicle,
            commission,
            overlaps,
        })
    }

    /// Rates for a property on the given night
    pub fn lookup_accommodation_rate(
        &self,
        property: &PropertyKey,
        date: NaiveDate,
    ) -> Option<&OccupancyRates> {
        self.accommodation
            .iter()
            .find(|row| row.matches(property) && row.covers(date))
            .map(|row| &row.rates)
    }

    /// Per-person-per-night park fee for a location and traveler category.
    /// Rows never overlap, so the match is unique.
    pub fn lookup_park_fee(&self, location: &str, category: &str, date: NaiveDate) -> Option<Decimal> {
        self.park_fees
            .iter()
            .find(|row| row.location == location && row.category == category && row.covers(date))
            .map(|row| row.fee)
    }

    pub fn vehicle(&self) -> &VehicleRate {
        &self.vehicle
    }

    pub fn commission(&self) -> &CommissionRate {
        &self.commission
    }

    pub fn overlaps(&self) -> &[RateOverlap] {
        &self.overlaps
    }

    /// Locations offering accommodation
    pub fn locations(&self) -> Vec<String> {
        distinct(self.accommodation.iter().map(|r| &r.location))
    }

    /// Room categories offered at a location
    pub fn room_types(&self, location: &str) -> Vec<String> {
        distinct(
            self.accommodation
                .iter()
                .filter(|r| r.location == location)
                .map(|r| &r.room_type),
        )
    }

    /// Properties offering a room category at a location
    pub fn properties(&self, location: &str, room_type: &str) -> Vec<String> {
        distinct(
            self.accommodation
                .iter()
                .filter(|r| r.location == location && r.room_type == room_type)
                .map(|r| &r.property),
        )
    }
}

/// Resolve the rate of every room type in use at a stay on the given night.
/// A missing row, or an absent or zero rate for a booked room type, fails
/// with `RateNotFound`.
pub fn lookup_room_rates(
    table: &RateTable,
    stay_index: usize,
    stay: &Stay,
    date: NaiveDate,
) -> QuoteResult<Vec<(RoomType, Decimal)>> {
    let rates = table.lookup_accommodation_rate(&stay.property_key(), date);
    stay.rooms
        .in_use()
        .map(|room| {
            rates
                .and_then(|r| r.required(room))
                .map(|rate| (room, rate))
                .ok_or_else(|| QuoteError::RateNotFound {
                    stay: stay_index,
                    subject: stay.property.clone(),
                    date,
                    kind: RateKind::Accommodation(room),
                })
        })
        .collect()
}

/// Resolve a park fee, failing with `RateNotFound` for a stay
pub fn lookup_park_fee(
    table: &RateTable,
    stay: usize,
    location: &str,
    category: &str,
    date: NaiveDate,
) -> QuoteResult<Decimal> {
    table
        .lookup_park_fee(location, category, date)
        .ok_or_else(|| QuoteError::RateNotFound {
            stay,
            subject: location.to_string(),
            date,
            kind: RateKind::ParkFee,
        })
}

fn first_row<T>(rows: Vec<T>, table: &'static str) -> Result<T, RateTableError> {
    if rows.len() > 1 {
        tracing::warn!("{} table has {} rows, using the first", table, rows.len());
    }
    rows.into_iter().next().ok_or(RateTableError::EmptyTable(table))
}

fn find_overlaps<T>(
    table: &'static str,
    rows: &[T],
    same_key: impl Fn(&T, &T) -> bool,
    range: impl Fn(&T) -> (NaiveDate, NaiveDate),
    subject: impl Fn(&T) -> String,
) -> Vec<RateOverlap> {
    let mut overlaps = Vec::new();
    for (i, a) in rows.iter().enumerate() {
        let (a_from, a_to) = range(a);
        for (j, b) in rows.iter().enumerate().skip(i + 1) {
            let (b_from, b_to) = range(b);
            if same_key(a, b) && a_from <= b_to && b_from <= a_to {
                overlaps.push(RateOverlap {
                    table,
                    subject: subject(a),
                    first: i,
                    second: j,
                });
            }
        }
    }
    overlaps
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    values.cloned().collect::<BTreeSet<_>>().into_iter().collect()
}
