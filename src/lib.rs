//! Safari quotation server
//!
//! Prices multi-day safari trips from per-destination rate tables
//! (accommodation, park fees, vehicle, commission) and serves the
//! itemized breakdown over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod quote;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult, QuoteError, QuoteResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository, config.quotation.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
