//! Destination catalogue service (locations, room types, properties)

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    quote::RateTable,
    repository::Repository,
};

#[derive(Clone)]
pub struct DestinationsService {
    repository: Repository,
}

impl DestinationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List destinations with rate data
    pub fn list(&self) -> Vec<String> {
        self.repository.destination_names()
    }

    /// Get a destination's rate table
    pub fn get(&self, name: &str) -> AppResult<Arc<RateTable>> {
        self.repository
            .destination(name)
            .ok_or_else(|| AppError::NotFound(format!("Destination {} not found", name)))
    }

    pub fn locations(&self, name: &str) -> AppResult<Vec<String>> {
        Ok(self.get(name)?.locations())
    }

    /// Room types at a location, or the properties of one room type
    pub fn accommodations(
        &self,
        name: &str,
        location: &str,
        room_type: Option<&str>,
    ) -> AppResult<Vec<String>> {
        let table = self.get(name)?;
        if !table.locations().iter().any(|l| l == location) {
            return Err(AppError::NotFound(format!(
                "Location {} not found in {}",
                location, name
            )));
        }
        Ok(match room_type {
            Some(room_type) => table.properties(location, room_type),
            None => table.room_types(location),
        })
    }
}
