// SPDX-License-Identifier: MIT

//! Meeting collection operations.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::db::ProfileStore;
use crate::error::{AppError, Result};
use crate::models::{Meeting, MeetingStatus};
use crate::time_utils::now_rfc3339;

/// Fields accepted when scheduling a meeting.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMeeting {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub status: MeetingStatus,
}

/// Partial update for an existing meeting.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MeetingPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub participants: Option<Vec<String>>,
    pub status: Option<MeetingStatus>,
}

/// Meeting operations over the profile store.
#[derive(Clone)]
pub struct MeetingService {
    store: ProfileStore,
}

impl MeetingService {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    pub async fn add_meeting(&self, user_id: &str, new: NewMeeting) -> Result<Meeting> {
        new.validate()?;

        let now = now_rfc3339();
        let meeting = Meeting {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            date: new.date,
            time: new.time,
            participants: new.participants,
            status: new.status,
            created_at: now.clone(),
        };

        let created = meeting.clone();
        self.store
            .update(user_id, |profile| {
                profile.meetings.push(meeting);
                profile.touch(&now);
                Ok(())
            })
            .await?;

        tracing::info!(user_id, meeting_id = %created.id, "Meeting added");
        Ok(created)
    }

    pub async fn update_meeting(
        &self,
        user_id: &str,
        meeting_id: &str,
        patch: MeetingPatch,
    ) -> Result<Meeting> {
        patch.validate()?;

        let now = now_rfc3339();
        self.store
            .update(user_id, |profile| {
                let meeting = profile
                    .meetings
                    .iter_mut()
                    .find(|m| m.id == meeting_id)
                    .ok_or_else(|| AppError::NotFound(format!("Meeting {} not found", meeting_id)))?;

                if let Some(title) = patch.title {
                    meeting.title = title;
                }
                if let Some(date) = patch.date {
                    meeting.date = date;
                }
                if let Some(time) = patch.time {
                    meeting.time = time;
                }
                if let Some(participants) = patch.participants {
                    meeting.participants = participants;
                }
                if let Some(status) = patch.status {
                    meeting.status = status;
                }

                let updated = meeting.clone();
                profile.touch(&now);
                Ok(updated)
            })
            .await
    }

    /// Idempotent delete: an absent id is `Ok(false)`, not an error.
    pub async fn delete_meeting(&self, user_id: &str, meeting_id: &str) -> Result<bool> {
        let now = now_rfc3339();
        self.store
            .update(user_id, |profile| {
                let before = profile.meetings.len();
                profile.meetings.retain(|m| m.id != meeting_id);
                if profile.meetings.len() == before {
                    return Ok(false);
                }
                profile.touch(&now);
                Ok(true)
            })
            .await
    }

    pub async fn list_meetings(&self, user_id: &str) -> Result<Vec<Meeting>> {
        let profile = self
            .store
            .get(user_id)
            .await
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;
        Ok(profile.meetings)
    }
}
