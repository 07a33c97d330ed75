//! Day-by-day itinerary derived from the pricing walk

use chrono::NaiveDate;

use crate::{
    config::ItineraryConfig,
    error::{AppError, AppResult},
    models::{ItineraryEntry, ItineraryOverride, Stay},
};

/// Accumulates one entry per priced night, then a closing return transfer
pub struct ItineraryBuilder<'a> {
    config: &'a ItineraryConfig,
    entries: Vec<ItineraryEntry>,
}

impl<'a> ItineraryBuilder<'a> {
    pub fn new(config: &'a ItineraryConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    fn last_stop(&self) -> &str {
        self.entries
            .last()
            .map(|entry| entry.to.as_str())
            .unwrap_or(self.config.origin.as_str())
    }

    /// Record the night spent at `stay` starting on `date`
    pub fn push_night(&mut self, date: NaiveDate, stay: &Stay) {
        let activities = if self.entries.is_empty() {
            &self.config.arrival_activity
        } else {
            &self.config.touring_activity
        };
        let entry = ItineraryEntry {
            day: self.entries.len() as u32 + 1,
            date,
            from: self.last_stop().to_string(),
            to: stay.location.clone(),
            activities: activities.clone(),
            accommodation: stay.property.clone(),
            meal_plan: self.config.meal_plan.clone(),
        };
        self.entries.push(entry);
    }

    /// Append the return transfer to the origin on the last day
    pub fn finish(mut self, date: NaiveDate) -> Vec<ItineraryEntry> {
        let entry = ItineraryEntry {
            day: self.entries.len() as u32 + 1,
            date,
            from: self.last_stop().to_string(),
            to: self.config.origin.clone(),
            activities: self.config.departure_activity.clone(),
            accommodation: String::new(),
            meal_plan: self.config.departure_meal_plan.clone(),
        };
        self.entries.push(entry);
        self.entries
    }
}

/// Apply caller corrections by day number
pub fn apply_overrides(
    entries: &mut [ItineraryEntry],
    overrides: &[ItineraryOverride],
) -> AppResult<()> {
    for patch in overrides {
        let entry = entries
            .iter_mut()
            .find(|entry| entry.day == patch.day)
            .ok_or_else(|| {
                AppError::BadRequest(format!("Itinerary has no day {}", patch.day))
            })?;

        if let Some(from) = &patch.from {
            entry.from = from.clone();
        }
        if let Some(to) = &patch.to {
            entry.to = to.clone();
        }
        if let Some(activities) = &patch.activities {
            entry.activities = activities.clone();
        }
        if let Some(accommodation) = &patch.accommodation {
            entry.accommodation = accommodation.clone();
        }
        if let Some(meal_plan) = &patch.meal_plan {
            entry.meal_plan = meal_plan.clone();
        }
    }
    Ok(())
}
