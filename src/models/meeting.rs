//! Meeting entries on a profile.

use serde::{Deserialize, Serialize};

/// Scheduling status of a meeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    #[default]
    Scheduled,
    Upcoming,
    Completed,
    Cancelled,
}

/// A meeting stored inside a profile document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    /// Generated meeting ID (UUID v4)
    pub id: String,
    /// Meeting title
    pub title: String,
    /// Meeting date, free-form (e.g. "2026-03-14")
    #[serde(default)]
    pub date: String,
    /// Meeting time, free-form (e.g. "14:30")
    #[serde(default)]
    pub time: String,
    /// Participant names or identifiers
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub status: MeetingStatus,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}
