// SPDX-License-Identifier: MIT

//! Social graph operations.
//!
//! A follow is a directed edge mirrored on two documents: the followee's
//! `followers` list and the follower's `following` list. The repository has
//! no multi-document transaction, so the two sides are applied as two
//! sequential cycles in a fixed order: followee first, follower second. The
//! followee document is authoritative for edge state; a pair interrupted
//! between the two writes leaves a half-present edge that `reconcile`
//! repairs by re-adding the missing mirror.

use serde::Serialize;

use crate::db::ProfileStore;
use crate::error::{AppError, Result};
use crate::models::ProfileSummary;
use crate::time_utils::now_rfc3339;

/// Outcome of a follow mutation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FollowOutcome {
    pub now_following: bool,
}

/// Follow-graph operations over the profile store.
#[derive(Clone)]
pub struct SocialService {
    store: ProfileStore,
}

impl SocialService {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    /// Flip the directed edge follower → followee.
    ///
    /// Both profiles must exist before any write happens; the edge decision
    /// is then made inside the followee's cycle.
    pub async fn toggle_follow(
        &self,
        follower_id: &str,
        followee_id: &str,
    ) -> Result<FollowOutcome> {
        self.check_pair(follower_id, followee_id).await?;

        let now = now_rfc3339();
        let now_following = self
            .store
            .update(followee_id, |followee| {
                Ok(if followee.followers.iter().any(|id| id == follower_id) {
                    followee.remove_follower(follower_id, &now);
                    false
                } else {
                    followee.add_follower(follower_id, &now);
                    true
                })
            })
            .await?;

        self.store
            .update(follower_id, |follower| {
                if now_following {
                    follower.add_following(followee_id, &now);
                } else {
                    follower.remove_following(followee_id, &now);
                }
                Ok(())
            })
            .await?;

        tracing::info!(follower_id, followee_id, now_following, "Follow toggled");
        Ok(FollowOutcome { now_following })
    }

    /// Establish the follow edge actor → target, never toggling it off.
    ///
    /// Re-connecting an existing edge is a no-op on both documents.
    pub async fn connect_with_user(&self, actor_id: &str, target_id: &str) -> Result<FollowOutcome> {
        self.check_pair(actor_id, target_id).await?;

        let now = now_rfc3339();
        self.store
            .update(target_id, |target| {
                target.add_follower(actor_id, &now);
                Ok(())
            })
            .await?;
        self.store
            .update(actor_id, |actor| {
                actor.add_following(target_id, &now);
                Ok(())
            })
            .await?;

        tracing::info!(actor_id, target_id, "Connection established");
        Ok(FollowOutcome {
            now_following: true,
        })
    }

    /// Profiles following this user, resolved to summaries.
    ///
    /// Ids whose profile no longer exists are skipped.
    pub async fn get_followers(&self, user_id: &str) -> Result<Vec<ProfileSummary>> {
        let store = self.store.load().await;
        let profile = store
            .get(user_id)
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;

        Ok(profile
            .followers
            .iter()
            .filter_map(|id| store.get(id))
            .map(|p| p.summary())
            .collect())
    }

    /// Profiles this user follows, resolved to summaries.
    pub async fn get_following(&self, user_id: &str) -> Result<Vec<ProfileSummary>> {
        let store = self.store.load().await;
        let profile = store
            .get(user_id)
            .ok_or_else(|| AppError::UserNotFound(user_id.to_string()))?;

        Ok(profile
            .following
            .iter()
            .filter_map(|id| store.get(id))
            .map(|p| p.summary())
            .collect())
    }

    /// Reject self-edges and verify both endpoints exist before writing.
    async fn check_pair(&self, actor_id: &str, target_id: &str) -> Result<()> {
        if actor_id == target_id {
            return Err(AppError::Validation(
                "users cannot follow themselves".to_string(),
            ));
        }
        let store = self.store.load().await;
        for id in [actor_id, target_id] {
            if !store.contains_key(id) {
                return Err(AppError::UserNotFound(id.to_string()));
            }
        }
        Ok(())
    }
}
