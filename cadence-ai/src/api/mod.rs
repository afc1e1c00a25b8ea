//! API endpoint handlers

pub mod analysis;
pub mod business;
pub mod health;
pub mod meeting;
pub mod sse;

pub use analysis::analysis_routes;
pub use business::business_routes;
pub use health::health_routes;
pub use meeting::meeting_routes;
pub use sse::event_stream;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;

/// Success envelope returned by every POST endpoint
///
/// `recordId` is present only for endpoints that persist a row.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(rename = "recordId", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<Uuid>,
    /// ISO-8601 response timestamp
    pub timestamp: String,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            record_id: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn with_record(data: T, record_id: Uuid) -> Self {
        Self {
            success: true,
            data,
            record_id: Some(record_id),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Validate a required text field: present and not blank
pub(crate) fn require(value: Option<String>, message: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::BadRequest(message.to_string())),
    }
}
