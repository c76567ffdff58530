//! Wisdom record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single wisdom row as stored upstream.
///
/// `created_at` is assigned by the store and is absent only on the fallback
/// record, so it is skipped in JSON when `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WisdomRecord {
    pub id: i64,
    pub wisdom: String,
    pub author: String,
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Submission request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub wisdom: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// Submission confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
    pub data: WisdomRecord,
}

/// Count response; `count` stays a string so the degraded `"?"` fits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: String,
    pub unit: String,
}

/// Unit label attached to every count response.
pub const COUNT_UNIT: &str = "nuggets of hamster wisdom";

/// Count value reported when the upstream header is missing or malformed.
pub const COUNT_UNKNOWN: &str = "?";

impl WisdomRecord {
    /// The fixed record returned when no approved wisdom exists yet.
    pub fn fallback() -> Self {
        Self {
            id: 0,
            wisdom: "The wheel never lies. Only you lie. About the wheel.".to_string(),
            author: "Gerald".to_string(),
            approved: true,
            created_at: None,
        }
    }
}
