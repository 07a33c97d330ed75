//! Business logic services

pub mod destinations;
pub mod quotes;

use crate::{config::QuotationConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub destinations: destinations::DestinationsService,
    pub quotes: quotes::QuotationService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, quotation_config: QuotationConfig) -> Self {
        let destinations = destinations::DestinationsService::new(repository);
        Self {
            quotes: quotes::QuotationService::new(destinations.clone(), quotation_config),
            destinations,
        }
    }
}
