//! Pricing walk: day-by-day costing of a trip across its stays

use rust_decimal::Decimal;

use crate::{
    config::QuotationConfig,
    error::{QuoteError, QuoteResult},
    models::{
        CommissionCharge, DayCostLine, ItineraryEntry, PricingResult, QuoteWarning, RoomType, Stay,
        Trip, VehicleCharge,
    },
};

use super::{
    itinerary::ItineraryBuilder,
    money::format_rate,
    rate_table::{lookup_park_fee, lookup_room_rates, RateTable},
    validation::{check_vehicles, validate_trip},
};

/// Deterministic output of one pricing run
#[derive(Debug, Clone, PartialEq)]
pub struct PricedTrip {
    pub pricing: PricingResult,
    pub itinerary: Vec<ItineraryEntry>,
    pub warnings: Vec<QuoteWarning>,
}

/// Price a trip against a destination's rate table.
///
/// Blocking checks run first (see [`validate_trip`]); any rate that cannot
/// be resolved during the walk aborts the run with `RateNotFound`.
pub fn price_trip(
    table: &RateTable,
    trip: &Trip,
    config: &QuotationConfig,
) -> QuoteResult<PricedTrip> {
    validate_trip(trip)?;

    let travelers = Decimal::from(trip.travelers);
    let mut cursor = trip.start_date;
    let mut lines = Vec::with_capacity(trip.nights().max(0) as usize);
    let mut itinerary = ItineraryBuilder::new(&config.itinerary);
    let mut accommodation_total = Decimal::ZERO;
    let mut park_fee_total = Decimal::ZERO;

    for (index, stay) in trip.stays.iter().enumerate() {
        tracing::debug!(
            "Pricing stay #{} at {} ({} nights from {})",
            index + 1,
            stay.property,
            stay.nights,
            cursor
        );

        for _ in 0..stay.nights {
            let room_rates = lookup_room_rates(table, index, stay, cursor)?;
            let accommodation_cost = checked_total(
                "accommodation cost",
                room_rates
                    .iter()
                    .map(|(room, rate)| Decimal::from(stay.rooms.pax(*room)).checked_mul(*rate)),
            )?;

            let park_fee_rate = lookup_park_fee(
                table,
                index,
                &stay.location,
                &config.park_fee_category,
                cursor,
            )?;
            let park_fee_cost = travelers
                .checked_mul(park_fee_rate)
                .ok_or_else(|| overflow("park fee cost"))?;

            accommodation_total = accommodation_total
                .checked_add(accommodation_cost)
                .ok_or_else(|| overflow("accommodation total"))?;
            park_fee_total = park_fee_total
                .checked_add(park_fee_cost)
                .ok_or_else(|| overflow("park fee total"))?;

            lines.push(DayCostLine {
                date: cursor,
                stay: index,
                property: stay.property.clone(),
                location: stay.location.clone(),
                rooms: describe_rooms(stay, &room_rates, &config.currency_symbol),
                accommodation_cost,
                park_fee_rate,
                park_fee_cost,
            });
            itinerary.push_night(cursor, stay);

            cursor = cursor.succ_opt().unwrap_or(cursor);
        }
    }

    let days = u32::try_from(trip.days()).unwrap_or(u32::MAX);
    let vehicle_rate = table.vehicle().cost_per_day;
    let vehicle = VehicleCharge {
        rate_per_day: vehicle_rate,
        days,
        vehicles: trip.vehicles,
        total: vehicle_rate
            .checked_mul(Decimal::from(days))
            .and_then(|total| total.checked_mul(Decimal::from(trip.vehicles)))
            .ok_or_else(|| overflow("vehicle cost"))?,
    };

    let commission_rate = table.commission().per_person;
    let commission = CommissionCharge {
        rate_per_person: commission_rate,
        travelers: trip.travelers,
        total: commission_rate
            .checked_mul(travelers)
            .ok_or_else(|| overflow("commission"))?,
    };

    let extras_total = checked_total(
        "additional charges",
        trip.extras.iter().map(|extra| extra.total()),
    )?;

    let grand_total = checked_total(
        "grand total",
        [
            accommodation_total,
            park_fee_total,
            vehicle.total,
            commission.total,
            extras_total,
        ]
        .into_iter()
        .map(Some),
    )?;
    // travelers >= 1 after validate_trip
    let per_person = grand_total.checked_div(travelers).unwrap_or(grand_total);

    let warnings = check_vehicles(trip, config.seats_per_vehicle)
        .into_iter()
        .collect::<Vec<_>>();
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    Ok(PricedTrip {
        pricing: PricingResult {
            lines,
            accommodation_total,
            park_fee_total,
            vehicle,
            commission,
            extras_total,
            grand_total,
            per_person,
        },
        itinerary: itinerary.finish(trip.end_date),
        warnings,
    })
}

fn overflow(subject: &str) -> QuoteError {
    QuoteError::AmountOverflow {
        subject: subject.to_string(),
    }
}

/// Sum of amounts, any of which may already have overflowed
fn checked_total(
    subject: &str,
    amounts: impl IntoIterator<Item = Option<Decimal>>,
) -> QuoteResult<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount?))
        .ok_or_else(|| overflow(subject))
}

/// `1S (1 Pax x $120), 1D (2 Pax x $100)`
fn describe_rooms(stay: &Stay, room_rates: &[(RoomType, Decimal)], symbol: &str) -> String {
    room_rates
        .iter()
        .map(|(room, rate)| {
            format!(
                "{}{} ({} Pax x {})",
                stay.rooms.count(*room),
                room.code(),
                stay.rooms.pax(*room),
                format_rate(symbol, *rate)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AccommodationRate, CommissionRate, ExtraCharge, OccupancyRates, ParkFee, RateKind,
        RateSheet, RoomComposition, VehicleRate,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn table() -> RateTable {
        let acc = |location: &str, property: &str, from, to, rates| AccommodationRate {
            location: location.to_string(),
            room_type: "Lodge".to_string(),
            property: property.to_string(),
            date_from: from,
            date_to: to,
            rates,
        };
        let fee = |location: &str, from, to, fee| ParkFee {
            location: location.to_string(),
            category: "Adult".to_string(),
            date_from: from,
            date_to: to,
            fee,
        };
        RateTable::from_sheet(RateSheet {
            accommodation: vec![
                acc(
                    "Amboseli",
                    "Ol Tukai",
                    date(2026, 1, 1),
                    date(2026, 6, 15),
                    OccupancyRates {
                        single: Some(dec!(180)),
                        double: Some(dec!(120)),
                        triple: Some(dec!(110)),
                    },
                ),
                acc(
                    "Amboseli",
                    "Ol Tukai",
                    date(2026, 6, 16),
                    date(2026, 12, 31),
                    OccupancyRates {
                        single: Some(dec!(200)),
                        double: Some(dec!(140)),
                        triple: None,
                    },
                ),
                acc(
                    "Masai Mara",
                    "Kilima",
                    date(2026, 1, 1),
                    date(2026, 12, 31),
                    OccupancyRates {
                        single: Some(dec!(150.50)),
                        double: Some(dec!(99.99)),
                        triple: None,
                    },
                ),
            ],
            park_fees: vec![
                fee("Amboseli", date(2026, 1, 1), date(2026, 12, 31), dec!(60)),
                fee("Masai Mara", date(2026, 1, 1), date(2026, 6, 30), dec!(100)),
                fee("Masai Mara", date(2026, 7, 1), date(2026, 12, 31), dec!(200)),
            ],
            vehicle: vec![VehicleRate { cost_per_day: dec!(250) }],
            commission: vec![CommissionRate { per_person: dec!(45) }],
        })
        .unwrap()
    }

    fn stay(location: &str, property: &str, nights: u32, rooms: RoomComposition) -> Stay {
        Stay {
            location: location.to_string(),
            room_type: "Lodge".to_string(),
            property: property.to_string(),
            nights,
            rooms,
        }
    }

    fn trip(start: NaiveDate, end: NaiveDate, travelers: u32, stays: Vec<Stay>) -> Trip {
        Trip {
            start_date: start,
            end_date: end,
            travelers,
            vehicles: 1,
            stays,
            extras: Vec::new(),
        }
    }

    #[test]
    fn test_rate_changes_mid_stay() {
        // 14th and 15th at the first rate, 16th at the second
        let t = trip(
            date(2026, 6, 14),
            date(2026, 6, 17),
            3,
            vec![stay("Amboseli", "Ol Tukai", 3, RoomComposition::new(1, 1, 0))],
        );
        let priced = price_trip(&table(), &t, &QuotationConfig::default()).unwrap();
        let costs: Vec<_> = priced.pricing.lines.iter().map(|l| l.accommodation_cost).collect();
        assert_eq!(costs, vec![dec!(420), dec!(420), dec!(480)]);
        assert_eq!(priced.pricing.accommodation_total, dec!(1320));
        assert_eq!(priced.pricing.lines[0].rooms, "1S (1 Pax x $180), 1D (2 Pax x $120)");
        assert_eq!(priced.pricing.park_fee_total, dec!(540));
    }

    #[test]
    fn test_multi_stay_walk_and_totals() {
        let rooms = RoomComposition::new(0, 1, 0);
        let mut t = trip(
            date(2026, 6, 29),
            date(2026, 7, 2),
            2,
            vec![
                stay("Amboseli", "Ol Tukai", 1, rooms),
                stay("Masai Mara", "Kilima", 2, rooms),
            ],
        );
        t.extras = vec![ExtraCharge {
            name: "Balloon".to_string(),
            unit_price: dec!(450),
            quantity: 2,
        }];

        let priced = price_trip(&table(), &t, &QuotationConfig::default()).unwrap();
        let pricing = &priced.pricing;

        assert_eq!(pricing.lines.len(), 3);
        assert_eq!(pricing.lines[1].date, date(2026, 6, 30));
        assert_eq!(pricing.lines[1].stay, 1);
        // park fee switches with the calendar, not the stay
        assert_eq!(pricing.lines[1].park_fee_cost, dec!(200));
        assert_eq!(pricing.lines[2].park_fee_cost, dec!(400));
        assert_eq!(pricing.accommodation_total, dec!(280) + dec!(199.98) * dec!(2));
        assert_eq!(pricing.vehicle.days, 4);
        assert_eq!(pricing.vehicle.total, dec!(1000));
        assert_eq!(pricing.commission.total, dec!(90));
        assert_eq!(pricing.extras_total, dec!(900));
        assert_eq!(
            pricing.grand_total,
            pricing.accommodation_total
                + pricing.park_fee_total
                + pricing.vehicle.total
                + pricing.commission.total
                + pricing.extras_total
        );
        assert_eq!(pricing.per_person, pricing.grand_total / dec!(2));

        let stops: Vec<_> = priced.itinerary.iter().map(|e| (e.from.as_str(), e.to.as_str())).collect();
        assert_eq!(
            stops,
            vec![
                ("Nairobi", "Amboseli"),
                ("Amboseli", "Masai Mara"),
                ("Masai Mara", "Masai Mara"),
                ("Masai Mara", "Nairobi"),
            ]
        );
    }

    #[test]
    fn test_unsupported_occupancy_is_rate_not_found() {
        // no triple rate from the 16th onwards
        let t = trip(
            date(2026, 6, 15),
            date(2026, 6, 17),
            3,
            vec![stay("Amboseli", "Ol Tukai", 2, RoomComposition::new(0, 0, 1))],
        );
        let err = price_trip(&table(), &t, &QuotationConfig::default()).unwrap_err();
        assert_eq!(
            err,
            QuoteError::RateNotFound {
                stay: 0,
                subject: "Ol Tukai".to_string(),
                date: date(2026, 6, 16),
                kind: RateKind::Accommodation(RoomType::Triple),
            }
        );
    }

    #[test]
    fn test_oversized_amounts_are_errors() {
        let mut t = trip(
            date(2026, 6, 14),
            date(2026, 6, 15),
            2,
            vec![stay("Amboseli", "Ol Tukai", 1, RoomComposition::new(0, 1, 0))],
        );
        t.extras = vec![ExtraCharge {
            name: "Charter flight".to_string(),
            unit_price: Decimal::MAX,
            quantity: 2,
        }];
        let err = price_trip(&table(), &t, &QuotationConfig::default()).unwrap_err();
        assert_eq!(
            err,
            QuoteError::AmountOverflow {
                subject: "additional charges".to_string()
            }
        );

        // fits on its own, overflows once the trip costs are added
        t.extras[0].quantity = 1;
        let err = price_trip(&table(), &t, &QuotationConfig::default()).unwrap_err();
        assert_eq!(
            err,
            QuoteError::AmountOverflow {
                subject: "grand total".to_string()
            }
        );
    }

    #[test]
    fn test_vehicle_shortfall_is_warning() {
        let mut t = trip(
            date(2026, 6, 14),
            date(2026, 6, 15),
            7,
            vec![stay("Amboseli", "Ol Tukai", 1, RoomComposition::new(1, 0, 2))],
        );
        t.vehicles = 1;
        let priced = price_trip(&table(), &t, &QuotationConfig::default()).unwrap();
        assert_eq!(
            priced.warnings,
            vec![QuoteWarning::InsufficientVehicles { required: 2, provided: 1 }]
        );
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let t = trip(
            date(2026, 6, 14),
            date(2026, 6, 17),
            3,
            vec![stay("Amboseli", "Ol Tukai", 3, RoomComposition::new(1, 1, 0))],
        );
        let config = QuotationConfig::default();
        let rates = table();
        let first = price_trip(&rates, &t, &config).unwrap();
        let second = price_trip(&rates, &t, &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first.pricing).unwrap(),
            serde_json::to_vec(&second.pricing).unwrap()
        );
    }
}
