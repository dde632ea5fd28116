// SPDX-License-Identifier: MIT

//! Profile lifecycle operations: read, create-or-merge, delete, repair.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::ProfileStore;
use crate::error::{AppError, Result};
use crate::models::{Profile, UserType};
use crate::time_utils::now_rfc3339;

/// Scalar profile fields accepted by create-or-update.
///
/// All fields are optional; only provided fields are merged into the
/// document. Collections and stats are never writable through this path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfilePatch {
    #[validate(length(max = 100))]
    pub display_name: Option<String>,
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    #[validate(url)]
    pub avatar_url: Option<String>,
    #[validate(url)]
    pub background_image_url: Option<String>,
    pub user_type: Option<UserType>,
    pub college: Option<String>,
    pub degree: Option<String>,
    pub course: Option<String>,
    pub year: Option<String>,
    pub location: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
}

/// Outcome of a store-wide repair pass.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ReconcileReport {
    /// Number of profiles whose derived state needed fixing.
    pub repaired_profiles: u32,
}

/// Profile document lifecycle service.
#[derive(Clone)]
pub struct ProfileService {
    store: ProfileStore,
}

impl ProfileService {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    /// Get one profile by id.
    pub async fn get_profile(&self, user_id: &str) -> Result<Profile> {
        self.store
            .get(user_id)
            .await
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))
    }

    /// Create the profile if absent, then merge the provided scalar fields.
    pub async fn create_or_update_profile(
        &self,
        user_id: &str,
        patch: ProfilePatch,
    ) -> Result<Profile> {
        if user_id.trim().is_empty() {
            return Err(AppError::Validation("user id must not be empty".to_string()));
        }
        patch.validate()?;

        let now = now_rfc3339();
        let profile = self
            .store
            .upsert(user_id, |profile| {
                apply_patch(profile, patch, &now);
                Ok(())
            })
            .await?;

        tracing::info!(user_id, "Profile upserted");
        Ok(profile)
    }

    /// Delete a profile wholesale.
    ///
    /// The deleted id is also cleared from every other profile's follower
    /// and following lists, so the graph holds no dangling references.
    /// Returns `true` if a document was removed.
    pub async fn delete_profile(&self, user_id: &str) -> Result<bool> {
        let removed = self.store.remove(user_id).await?;
        if removed {
            tracing::info!(user_id, "Profile deleted");
        } else {
            tracing::debug!(user_id, "Profile delete no-op, document absent");
        }
        Ok(removed)
    }

    /// Store-wide repair pass.
    ///
    /// Re-derives every counter from its backing collection, prunes
    /// references to users and projects that no longer exist, and restores
    /// follow-edge symmetry. A half-present edge is treated as a follow
    /// whose mirror write was lost, so the mirror is re-added.
    pub async fn reconcile(&self) -> Result<ReconcileReport> {
        let report = self
            .store
            .mutate_all(|store| {
                let now = now_rfc3339();
                let known: BTreeSet<String> = store.keys().cloned().collect();
                let mut touched: BTreeSet<String> = BTreeSet::new();

                // Prune references to users and projects that no longer exist.
                for (id, profile) in store.iter_mut() {
                    let before = profile.followers.len()
                        + profile.following.len()
                        + profile.recent_project_ids.len();

                    profile.followers.retain(|f| known.contains(f) && f != id);
                    profile.following.retain(|f| known.contains(f) && f != id);
                    let project_ids: BTreeSet<&str> =
                        profile.projects.iter().map(|p| p.id.as_str()).collect();
                    profile
                        .recent_project_ids
                        .retain(|pid| project_ids.contains(pid.as_str()));

                    let after = profile.followers.len()
                        + profile.following.len()
                        + profile.recent_project_ids.len();
                    if after != before {
                        profile.touch(&now);
                        touched.insert(id.clone());
                    }
                }

                // Restore edge symmetry from the union of both directions.
                let mut edges: BTreeSet<(String, String)> = BTreeSet::new();
                for (id, profile) in store.iter() {
                    for followee in &profile.following {
                        edges.insert((id.clone(), followee.clone()));
                    }
                    for follower in &profile.followers {
                        edges.insert((follower.clone(), id.clone()));
                    }
                }
                for (follower_id, followee_id) in edges {
                    if let Some(followee) = store.get_mut(&followee_id) {
                        if followee.add_follower(&follower_id, &now) {
                            touched.insert(followee_id.clone());
                        }
                    }
                    if let Some(follower) = store.get_mut(&follower_id) {
                        if follower.add_following(&followee_id, &now) {
                            touched.insert(follower_id.clone());
                        }
                    }
                }

                // Recount every derived counter.
                for (id, profile) in store.iter_mut() {
                    if profile.recount_stats() {
                        profile.touch(&now);
                        touched.insert(id.clone());
                    }
                }

                ReconcileReport {
                    repaired_profiles: touched.len() as u32,
                }
            })
            .await?;

        if report.repaired_profiles > 0 {
            tracing::info!(repaired = report.repaired_profiles, "Store reconciled");
        }
        Ok(report)
    }
}

fn apply_patch(profile: &mut Profile, patch: ProfilePatch, now: &str) {
    if let Some(display_name) = patch.display_name {
        profile.display_name = display_name;
    }
    if let Some(bio) = patch.bio {
        profile.bio = bio;
    }
    if let Some(avatar_url) = patch.avatar_url {
        profile.avatar_url = Some(avatar_url);
    }
    if let Some(background_image_url) = patch.background_image_url {
        profile.background_image_url = Some(background_image_url);
    }
    if let Some(user_type) = patch.user_type {
        profile.user_type = user_type;
    }
    if let Some(college) = patch.college {
        profile.college = college;
    }
    if let Some(degree) = patch.degree {
        profile.degree = degree;
    }
    if let Some(course) = patch.course {
        profile.course = course;
    }
    if let Some(year) = patch.year {
        profile.year = year;
    }
    if let Some(location) = patch.location {
        profile.location = location;
    }
    if let Some(website) = patch.website {
        profile.website = website;
    }
    profile.touch(now);
}
