//! Error types for the safari quotation server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::models::RateKind;

/// Application error codes returned in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchDestination = 2,
    BadValue = 3,
    InvalidDateRange = 4,
    NoTravelers = 5,
    OccupancyMismatch = 6,
    NightAllocationMismatch = 7,
    RateNotFound = 8,
    RateTableInvalid = 9,
    AmountOverflow = 10,
}

/// Direction and size of an occupancy mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "direction", content = "travelers", rename_all = "snake_case")]
pub enum OccupancyGap {
    /// Rooms house fewer travelers than the trip has
    Shortfall(u64),
    /// Rooms house more travelers than the trip has
    Excess(u64),
}

impl OccupancyGap {
    pub fn between(expected: u64, actual: u64) -> Option<Self> {
        match actual.cmp(&expected) {
            std::cmp::Ordering::Less => Some(OccupancyGap::Shortfall(expected - actual)),
            std::cmp::Ordering::Greater => Some(OccupancyGap::Excess(actual - expected)),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for OccupancyGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccupancyGap::Shortfall(n) => write!(f, "{} more traveler(s) need a room", n),
            OccupancyGap::Excess(n) => write!(f, "rooms over-allocated by {} traveler(s)", n),
        }
    }
}

fn describe_gap(expected: u32, actual: u64) -> String {
    OccupancyGap::between(u64::from(expected), actual)
        .map(|gap| gap.to_string())
        .unwrap_or_default()
}

/// Failures of a pricing run. Any of these aborts the whole calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("End date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Trip must have at least one traveler")]
    NoTravelers,

    #[error(
        "Stay #{} at {property}: room pax ({actual}) must match total adults ({expected}), {}",
        .stay + 1,
        describe_gap(*.expected, *.actual)
    )]
    OccupancyMismatch {
        stay: usize,
        property: String,
        expected: u32,
        actual: u64,
    },

    #[error("Allocate exactly {expected} nights ({actual} assigned)")]
    NightAllocationMismatch { expected: i64, actual: u64 },

    #[error("No {kind} for {subject} on {date} (stay #{})", .stay + 1)]
    RateNotFound {
        stay: usize,
        subject: String,
        date: NaiveDate,
        kind: RateKind,
    },

    #[error("{subject} exceeds the supported amount range")]
    AmountOverflow { subject: String },
}

impl QuoteError {
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::InvalidDateRange { .. } => ErrorCode::InvalidDateRange,
            QuoteError::NoTravelers => ErrorCode::NoTravelers,
            QuoteError::OccupancyMismatch { .. } => ErrorCode::OccupancyMismatch,
            QuoteError::NightAllocationMismatch { .. } => ErrorCode::NightAllocationMismatch,
            QuoteError::RateNotFound { .. } => ErrorCode::RateNotFound,
            QuoteError::AmountOverflow { .. } => ErrorCode::AmountOverflow,
        }
    }

    /// Structured context for the calling layer
    pub fn details(&self) -> serde_json::Value {
        match self {
            QuoteError::InvalidDateRange { start, end } => json!({
                "start_date": start,
                "end_date": end,
            }),
            QuoteError::NoTravelers => serde_json::Value::Null,
            QuoteError::OccupancyMismatch { stay, property, expected, actual } => json!({
                "stay": stay,
                "property": property,
                "expected": expected,
                "actual": actual,
                "gap": OccupancyGap::between(u64::from(*expected), *actual),
            }),
            QuoteError::NightAllocationMismatch { expected, actual } => json!({
                "expected": expected,
                "actual": actual,
                "remaining": expected.saturating_sub(i64::try_from(*actual).unwrap_or(i64::MAX)),
            }),
            QuoteError::RateNotFound { stay, subject, date, kind } => json!({
                "stay": stay,
                "subject": subject,
                "date": date,
                "rate": kind,
            }),
            QuoteError::AmountOverflow { subject } => json!({
                "subject": subject,
            }),
        }
    }
}

/// Errors raised while loading and validating rate tables
#[derive(Error, Debug)]
pub enum RateTableError {
    #[error("Failed to read rate file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rate file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{table} row {row} ({subject}) ends on {date_to} before it starts on {date_from}")]
    InvertedRange {
        table: &'static str,
        row: usize,
        subject: String,
        date_from: NaiveDate,
        date_to: NaiveDate,
    },

    #[error("{table} rows {first} and {second} ({subject}) have overlapping date ranges")]
    OverlappingRange {
        table: &'static str,
        subject: String,
        first: usize,
        second: usize,
    },

    #[error("{0} table is empty")]
    EmptyTable(&'static str),
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("Rate table error: {0}")]
    RateTable(#[from] RateTableError),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchDestination, msg.clone(), None)
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone(), None)
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone(), None)
            }
            AppError::Quote(e) => {
                let details = Some(e.details()).filter(|d| !d.is_null());
                (StatusCode::UNPROCESSABLE_ENTITY, e.code(), e.to_string(), details)
            }
            AppError::RateTable(e) => {
                tracing::error!("Rate table error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::RateTableInvalid,
                    "Rate data unavailable".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for the pricing core
pub type QuoteResult<T> = Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_gap_direction() {
        assert_eq!(OccupancyGap::between(2, 3), Some(OccupancyGap::Excess(1)));
        assert_eq!(OccupancyGap::between(4, 1), Some(OccupancyGap::Shortfall(3)));
        assert_eq!(OccupancyGap::between(2, 2), None);
    }

    #[test]
    fn test_occupancy_mismatch_message() {
        let err = QuoteError::OccupancyMismatch {
            stay: 0,
            property: "Kilima Camp".to_string(),
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Stay #1 at Kilima Camp: room pax (3) must match total adults (2), rooms over-allocated by 1 traveler(s)"
        );
        assert_eq!(err.details()["gap"]["direction"], "excess");
    }

    #[test]
    fn test_night_allocation_details() {
        let err = QuoteError::NightAllocationMismatch { expected: 6, actual: 5 };
        assert_eq!(err.code(), ErrorCode::NightAllocationMismatch);
        assert_eq!(err.details()["remaining"], 1);

        let err = QuoteError::NightAllocationMismatch { expected: 0, actual: u64::from(u32::MAX) + 1 };
        assert_eq!(err.details()["remaining"], -4_294_967_296i64);
    }
}
