use chrono::{DateTime, Utc};
use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// "up" when the database answers a ping, "down" otherwise
    pub database: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Plain acknowledgement body
#[derive(Object, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Render a stored unix timestamp as RFC 3339
pub fn format_timestamp(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or_default()
        .to_rfc3339()
}
