//! Quotation service

use uuid::Uuid;

use crate::{
    config::QuotationConfig,
    error::AppResult,
    models::{ItineraryOverride, Quotation, Trip, TripSummary},
    quote::{itinerary::apply_overrides, price_trip, report::render_breakdown},
};

use super::destinations::DestinationsService;

#[derive(Clone)]
pub struct QuotationService {
    destinations: DestinationsService,
    config: QuotationConfig,
}

impl QuotationService {
    pub fn new(destinations: DestinationsService, config: QuotationConfig) -> Self {
        Self { destinations, config }
    }

    /// Price a trip for a destination and apply itinerary corrections
    pub fn create_quote(
        &self,
        destination: &str,
        trip: &Trip,
        overrides: &[ItineraryOverride],
    ) -> AppResult<Quotation> {
        let table = self.destinations.get(destination)?;
        let mut priced = price_trip(&table, trip, &self.config)?;
        apply_overrides(&mut priced.itinerary, overrides)?;

        let quotation = Quotation {
            id: Uuid::new_v4(),
            destination: destination.to_string(),
            trip: TripSummary {
                start_date: trip.start_date,
                end_date: trip.end_date,
                days: priced.pricing.vehicle.days,
                nights: priced.pricing.lines.len() as u32,
                travelers: trip.travelers,
                vehicles: trip.vehicles,
            },
            pricing: priced.pricing,
            itinerary: priced.itinerary,
            warnings: priced.warnings,
        };

        tracing::info!(
            "Quotation {} for {}: {} travelers, {} nights, total {}",
            quotation.id,
            destination,
            quotation.trip.travelers,
            quotation.trip.nights,
            quotation.pricing.grand_total
        );

        Ok(quotation)
    }

    /// Plain-text breakdown of a quotation
    pub fn render(&self, quotation: &Quotation) -> String {
        render_breakdown(quotation, &self.config.currency_symbol)
    }
}
