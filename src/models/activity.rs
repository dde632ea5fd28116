// SPDX-License-Identifier: MIT

//! Activity log entries on a profile.

use serde::{Deserialize, Serialize};

/// One entry in a profile's bounded activity log.
///
/// The activity kind is an open set ("project_created", "profile_updated",
/// ...) so it stays a plain string on the wire rather than an enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Generated entry ID (UUID v4)
    pub id: String,
    /// Activity kind
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable description
    pub description: String,
    /// When the activity happened (ISO 8601)
    pub timestamp: String,
    /// Optional id of the entity this entry refers to
    #[serde(default)]
    pub related_id: Option<String>,
}
