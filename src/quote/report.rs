//! Plain-text audit breakdown of a priced quotation

use crate::models::Quotation;

use super::money::{format_money, format_rate};

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Render the accommodation, park fee and vehicle/extras sections followed
/// by the grand total and the cost per person.
pub fn render_breakdown(quotation: &Quotation, symbol: &str) -> String {
    let pricing = &quotation.pricing;
    let travelers = quotation.trip.travelers;
    let money = |amount| format_money(symbol, amount);
    let mut lines = vec!["1. Accommodation".to_string()];

    lines.extend(pricing.lines.iter().map(|line| {
        format!(
            "{} | {} | {} = {}",
            line.date,
            truncate(&line.property, 10),
            line.rooms,
            money(line.accommodation_cost)
        )
    }));
    lines.push(format!("Subtotal: {}", money(pricing.accommodation_total)));

    lines.push(String::new());
    lines.push("2. Park Fees".to_string());
    lines.extend(pricing.lines.iter().map(|line| {
        format!(
            "{} | {} | {} Pax x {} = {}",
            line.date,
            truncate(&line.location, 15),
            travelers,
            format_rate(symbol, line.park_fee_rate),
            money(line.park_fee_cost)
        )
    }));
    lines.push(format!("Subtotal: {}", money(pricing.park_fee_total)));

    let vehicle = &pricing.vehicle;
    let commission = &pricing.commission;
    lines.push(String::new());
    lines.push("3. Vehicle & Extras".to_string());
    lines.push(format!(
        "Vehicle: {} Vehicle(s) x {} Days x {} = {}",
        vehicle.vehicles,
        vehicle.days,
        format_rate(symbol, vehicle.rate_per_day),
        money(vehicle.total)
    ));
    lines.push(format!(
        "Commission: {} Adults x {} = {}",
        commission.travelers,
        format_rate(symbol, commission.rate_per_person),
        money(commission.total)
    ));
    lines.push(format!("Additional: {}", money(pricing.extras_total)));

    lines.push(String::new());
    lines.push(format!("TOTAL TRIP COST: {}", money(pricing.grand_total)));
    lines.push(format!("COST PER PERSON: {}", money(pricing.per_person)));
    lines.join("\n")
}
