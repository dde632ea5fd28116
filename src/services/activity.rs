// SPDX-License-Identifier: MIT

//! Activity log operations.
//!
//! Recording is never implicit: collection operations do not emit log
//! entries on their own, callers chain `record_activity` explicitly.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::db::ProfileStore;
use crate::error::{AppError, Result};
use crate::models::ActivityEntry;
use crate::time_utils::now_rfc3339;

/// Fields accepted when recording an activity.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewActivity {
    /// Open-set activity kind, e.g. "project_created"
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub kind: String,
    #[validate(length(min = 1, max = 500))]
    pub description: String,
    #[serde(default)]
    pub related_id: Option<String>,
}

/// Activity log operations over the profile store.
#[derive(Clone)]
pub struct ActivityService {
    store: ProfileStore,
}

impl ActivityService {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    /// Prepend an entry to the activity log, evicting past the cap.
    pub async fn record_activity(&self, user_id: &str, new: NewActivity) -> Result<ActivityEntry> {
        new.validate()?;

        let now = now_rfc3339();
        let entry = ActivityEntry {
            id: Uuid::new_v4().to_string(),
            kind: new.kind,
            description: new.description,
            timestamp: now.clone(),
            related_id: new.related_id,
        };

        let recorded = entry.clone();
        self.store
            .update(user_id, |profile| {
                profile.push_activity(entry, &now);
                Ok(())
            })
            .await?;

        tracing::debug!(user_id, kind = %recorded.kind, "Activity recorded");
        Ok(recorded)
    }

    /// The activity log, newest first.
    pub async fn recent_activity(&self, user_id: &str) -> Result<Vec<ActivityEntry>> {
        let profile = self
            .store
            .get(user_id)
            .await
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;
        Ok(profile.recent_activity)
    }
}
