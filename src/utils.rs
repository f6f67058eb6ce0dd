use chrono::{DateTime, SecondsFormat, Utc};

/// A fresh, collision-resistant record id (UUID v4, no hyphens).
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Current time as an RFC 3339 timestamp with millisecond precision,
/// e.g. `2025-01-05T10:00:00.000Z`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render a stored timestamp for display, e.g. `January 5, 2025`.
///
/// Anything that does not parse as RFC 3339 is returned unchanged.
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
