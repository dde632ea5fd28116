// SPDX-License-Identifier: MIT

//! Quick-action collection operations.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::db::ProfileStore;
use crate::error::{AppError, Result};
use crate::models::QuickAction;
use crate::time_utils::now_rfc3339;

/// Fields accepted when adding a quick action.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewQuickAction {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub action: String,
}

/// Partial update for an existing quick action.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuickActionPatch {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,
    pub icon: Option<String>,
    pub action: Option<String>,
}

/// Quick-action operations over the profile store.
#[derive(Clone)]
pub struct QuickActionService {
    store: ProfileStore,
}

impl QuickActionService {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    pub async fn add_quick_action(&self, user_id: &str, new: NewQuickAction) -> Result<QuickAction> {
        new.validate()?;

        let now = now_rfc3339();
        let quick_action = QuickAction {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            icon: new.icon,
            action: new.action,
            created_at: now.clone(),
        };

        let created = quick_action.clone();
        self.store
            .update(user_id, |profile| {
                profile.quick_actions.push(quick_action);
                profile.touch(&now);
                Ok(())
            })
            .await?;

        tracing::info!(user_id, action_id = %created.id, "Quick action added");
        Ok(created)
    }

    pub async fn update_quick_action(
        &self,
        user_id: &str,
        action_id: &str,
        patch: QuickActionPatch,
    ) -> Result<QuickAction> {
        patch.validate()?;

        let now = now_rfc3339();
        self.store
            .update(user_id, |profile| {
                let quick_action = profile
                    .quick_actions
                    .iter_mut()
                    .find(|a| a.id == action_id)
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Quick action {} not found", action_id))
                    })?;

                if let Some(title) = patch.title {
                    quick_action.title = title;
                }
                if let Some(icon) = patch.icon {
                    quick_action.icon = icon;
                }
                if let Some(action) = patch.action {
                    quick_action.action = action;
                }

                let updated = quick_action.clone();
                profile.touch(&now);
                Ok(updated)
            })
            .await
    }

    /// Idempotent delete: an absent id is `Ok(false)`, not an error.
    pub async fn delete_quick_action(&self, user_id: &str, action_id: &str) -> Result<bool> {
        let now = now_rfc3339();
        self.store
            .update(user_id, |profile| {
                let before = profile.quick_actions.len();
                profile.quick_actions.retain(|a| a.id != action_id);
                if profile.quick_actions.len() == before {
                    return Ok(false);
                }
                profile.touch(&now);
                Ok(true)
            })
            .await
    }

    pub async fn list_quick_actions(&self, user_id: &str) -> Result<Vec<QuickAction>> {
        let profile = self
            .store
            .get(user_id)
            .await
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;
        Ok(profile.quick_actions)
    }
}
