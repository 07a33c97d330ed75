//! Configuration management for the safari quotation server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RatesConfig {
    /// Directory holding one `<Destination>.json` rate sheet per destination
    pub data_dir: String,
}

/// Defaults used when deriving the itinerary from the pricing walk
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ItineraryConfig {
    pub origin: String,
    pub arrival_activity: String,
    pub touring_activity: String,
    pub departure_activity: String,
    pub meal_plan: String,
    pub departure_meal_plan: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct QuotationConfig {
    /// Traveler category used for park fee lookups
    pub park_fee_category: String,
    pub seats_per_vehicle: u32,
    pub currency_symbol: String,
    pub itinerary: ItineraryConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub rates: RatesConfig,
    #[serde(default)]
    pub quotation: QuotationConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. SAFARI_SERVER__PORT=9000)
            .add_source(
                Environment::with_prefix("SAFARI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override rate directory from RATES_DIR env var if present
            .set_override_option("rates.data_dir", env::var("RATES_DIR").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
        }
    }
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self {
            origin: "Nairobi".to_string(),
            arrival_activity: "Transfer & afternoon game drive".to_string(),
            touring_activity: "Full day game drive".to_string(),
            departure_activity: "Morning game drive & return transfer".to_string(),
            meal_plan: "FB".to_string(),
            departure_meal_plan: "B".to_string(),
        }
    }
}

impl Default for QuotationConfig {
    fn default() -> Self {
        Self {
            park_fee_category: "Adult".to_string(),
            seats_per_vehicle: 6,
            currency_symbol: "$".to_string(),
            itinerary: ItineraryConfig::default(),
        }
    }
}
