// SPDX-License-Identifier: MIT

//! Project collection operations.
//!
//! Projects carry the most derived state of any nested collection: the
//! `stats.projects` counter and the bounded `recent_project_ids` recency
//! list both track this collection.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::db::ProfileStore;
use crate::error::{AppError, Result};
use crate::models::{Project, ProjectStatus};
use crate::time_utils::now_rfc3339;

/// Fields accepted when creating a project. Id and timestamps are generated.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    #[validate(url)]
    pub image_url: Option<String>,
}

/// Partial update for an existing project; only provided fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProjectPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub links: Option<Vec<String>>,
    #[validate(url)]
    pub image_url: Option<String>,
}

/// Project operations over the profile store.
#[derive(Clone)]
pub struct ProjectService {
    store: ProfileStore,
}

impl ProjectService {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    /// Create a project and sync the project counter.
    pub async fn create_project(&self, user_id: &str, new: NewProject) -> Result<Project> {
        new.validate()?;

        let now = now_rfc3339();
        let project = Project {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            status: new.status,
            category: new.category,
            tags: new.tags,
            links: new.links,
            image_url: new.image_url,
            created_at: now.clone(),
            updated_at: now.clone(),
        };

        let created = project.clone();
        self.store
            .update(user_id, |profile| {
                profile.push_project(project, &now);
                Ok(())
            })
            .await?;

        tracing::info!(user_id, project_id = %created.id, "Project created");
        Ok(created)
    }

    /// Shallow-merge fields into an existing project.
    pub async fn update_project(
        &self,
        user_id: &str,
        project_id: &str,
        patch: ProjectPatch,
    ) -> Result<Project> {
        patch.validate()?;

        let now = now_rfc3339();
        self.store
            .update(user_id, |profile| {
                let project = profile
                    .projects
                    .iter_mut()
                    .find(|p| p.id == project_id)
                    .ok_or_else(|| AppError::NotFound(format!("Project {} not found", project_id)))?;

                if let Some(title) = patch.title {
                    project.title = title;
                }
                if let Some(description) = patch.description {
                    project.description = description;
                }
                if let Some(status) = patch.status {
                    project.status = status;
                }
                if let Some(category) = patch.category {
                    project.category = category;
                }
                if let Some(tags) = patch.tags {
                    project.tags = tags;
                }
                if let Some(links) = patch.links {
                    project.links = links;
                }
                if let Some(image_url) = patch.image_url {
                    project.image_url = Some(image_url);
                }
                project.updated_at = now.clone();

                let updated = project.clone();
                profile.touch(&now);
                Ok(updated)
            })
            .await
    }

    /// Delete a project, dropping its `recent_project_ids` reference and
    /// syncing the counter in the same cycle.
    ///
    /// Idempotent: deleting an absent id returns `Ok(false)` without
    /// mutating the document.
    pub async fn delete_project(&self, user_id: &str, project_id: &str) -> Result<bool> {
        let now = now_rfc3339();
        let removed = self
            .store
            .update(user_id, |profile| Ok(profile.remove_project(project_id, &now)))
            .await?;

        if removed {
            tracing::info!(user_id, project_id, "Project deleted");
        } else {
            tracing::debug!(user_id, project_id, "Project delete no-op, id absent");
        }
        Ok(removed)
    }

    /// Move a project to the front of the recent list.
    ///
    /// The id must refer to an existing project; the recent list never
    /// holds ids that the projects collection does not.
    pub async fn touch_recent_project(&self, user_id: &str, project_id: &str) -> Result<()> {
        let now = now_rfc3339();
        self.store
            .update(user_id, |profile| {
                if !profile.projects.iter().any(|p| p.id == project_id) {
                    return Err(AppError::NotFound(format!("Project {} not found", project_id)));
                }
                profile.touch_recent_project(project_id, &now);
                Ok(())
            })
            .await
    }

    /// All projects, in insertion order.
    pub async fn list_projects(&self, user_id: &str) -> Result<Vec<Project>> {
        let profile = self
            .store
            .get(user_id)
            .await
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;
        Ok(profile.projects)
    }

    /// Recently-touched projects, most recent first.
    pub async fn recent_projects(&self, user_id: &str) -> Result<Vec<Project>> {
        let profile = self
            .store
            .get(user_id)
            .await
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;

        Ok(profile
            .recent_project_ids
            .iter()
            .filter_map(|id| profile.projects.iter().find(|p| &p.id == id).cloned())
            .collect())
    }
}
