// SPDX-License-Identifier: MIT

//! Skill collection operations.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::db::ProfileStore;
use crate::error::{AppError, Result};
use crate::models::{Skill, SkillLevel};
use crate::time_utils::now_rfc3339;

/// Fields accepted when adding a skill.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewSkill {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub category: String,
}

/// Partial update for an existing skill.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SkillPatch {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
    pub category: Option<String>,
}

/// Skill operations over the profile store.
#[derive(Clone)]
pub struct SkillService {
    store: ProfileStore,
}

impl SkillService {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    pub async fn add_skill(&self, user_id: &str, new: NewSkill) -> Result<Skill> {
        new.validate()?;

        let now = now_rfc3339();
        let skill = Skill {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            level: new.level,
            category: new.category,
            created_at: now.clone(),
        };

        let created = skill.clone();
        self.store
            .update(user_id, |profile| {
                profile.skills.push(skill);
                profile.touch(&now);
                Ok(())
            })
            .await?;

        tracing::info!(user_id, skill_id = %created.id, "Skill added");
        Ok(created)
    }

    pub async fn update_skill(
        &self,
        user_id: &str,
        skill_id: &str,
        patch: SkillPatch,
    ) -> Result<Skill> {
        patch.validate()?;

        let now = now_rfc3339();
        self.store
            .update(user_id, |profile| {
                let skill = profile
                    .skills
                    .iter_mut()
                    .find(|s| s.id == skill_id)
                    .ok_or_else(|| AppError::NotFound(format!("Skill {} not found", skill_id)))?;

                if let Some(name) = patch.name {
                    skill.name = name;
                }
                if let Some(level) = patch.level {
                    skill.level = level;
                }
                if let Some(category) = patch.category {
                    skill.category = category;
                }

                let updated = skill.clone();
                profile.touch(&now);
                Ok(updated)
            })
            .await
    }

    /// Idempotent delete: an absent id is `Ok(false)`, not an error.
    pub async fn delete_skill(&self, user_id: &str, skill_id: &str) -> Result<bool> {
        let now = now_rfc3339();
        self.store
            .update(user_id, |profile| {
                let before = profile.skills.len();
                profile.skills.retain(|s| s.id != skill_id);
                if profile.skills.len() == before {
                    return Ok(false);
                }
                profile.touch(&now);
                Ok(true)
            })
            .await
    }

    pub async fn list_skills(&self, user_id: &str) -> Result<Vec<Skill>> {
        let profile = self
            .store
            .get(user_id)
            .await
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;
        Ok(profile.skills)
    }
}
