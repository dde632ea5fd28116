// SPDX-License-Identifier: MIT

//! Profile document model and derived-state maintenance.
//!
//! The counters in [`ProfileStats`] and the two bounded recency lists are
//! derived state. Every mutation that touches a backing collection goes
//! through the methods here, which keep the derived fields in lockstep:
//! - `stats.projects` always equals `projects.len()`
//! - `stats.followers` / `stats.following` track their edge lists
//! - `recent_project_ids` stays deduplicated, most-recent-first, capped at 5
//! - `recent_activity` stays newest-first, capped at 50

use serde::{Deserialize, Serialize};

use crate::models::{ActivityEntry, Meeting, Project, QuickAction, Skill};

/// Maximum entries retained in `recent_project_ids`.
pub const MAX_RECENT_PROJECTS: usize = 5;

/// Maximum entries retained in `recent_activity`.
pub const MAX_RECENT_ACTIVITY: usize = 50;

/// Broad account category for a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    Student,
    Professor,
    Business,
    Freelancer,
}

/// Derived counters kept in sync with their backing collections.
///
/// Never written directly by callers; `likes` has no backing collection in
/// this schema and is carried read-only for wire compatibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub projects: u32,
    #[serde(default)]
    pub likes: u32,
}

/// Condensed profile used when listing followers/following.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub user_type: UserType,
    pub bio: String,
}

/// A user profile document, the unit of storage.
///
/// Every collection field defaults to empty on decode so documents written
/// by older schema versions keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// User identifier, externally issued. Equals the store key.
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub background_image_url: Option<String>,
    #[serde(default)]
    pub user_type: UserType,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub stats: ProfileStats,
    /// Ids of users following this profile. Ordered, no duplicates.
    #[serde(default)]
    pub followers: Vec<String>,
    /// Ids of users this profile follows. Ordered, no duplicates.
    #[serde(default)]
    pub following: Vec<String>,
    #[serde(default)]
    pub quick_actions: Vec<QuickAction>,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Most-recently-touched project ids, newest first, capped at 5.
    #[serde(default)]
    pub recent_project_ids: Vec<String>,
    #[serde(default)]
    pub meetings: Vec<Meeting>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Activity log, newest first, capped at 50.
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Profile {
    /// Fresh profile with empty collections and zeroed stats.
    pub fn new(id: &str, now: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: String::new(),
            bio: String::new(),
            avatar_url: None,
            background_image_url: None,
            user_type: UserType::default(),
            college: String::new(),
            degree: String::new(),
            course: String::new(),
            year: String::new(),
            location: String::new(),
            website: String::new(),
            stats: ProfileStats::default(),
            followers: Vec::new(),
            following: Vec::new(),
            quick_actions: Vec::new(),
            projects: Vec::new(),
            recent_project_ids: Vec::new(),
            meetings: Vec::new(),
            skills: Vec::new(),
            recent_activity: Vec::new(),
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    /// Refresh `updated_at`. Called by every mutating method here.
    pub fn touch(&mut self, now: &str) {
        self.updated_at = now.to_string();
    }

    /// Condensed view for follower/following listings.
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            avatar_url: self.avatar_url.clone(),
            user_type: self.user_type,
            bio: self.bio.clone(),
        }
    }

    // ─── Projects ────────────────────────────────────────────────

    /// Append a project and sync the project counter.
    pub fn push_project(&mut self, project: Project, now: &str) {
        self.projects.push(project);
        self.stats.projects = self.projects.len() as u32;
        self.touch(now);
    }

    /// Remove a project by id, dropping it from `recent_project_ids` in the
    /// same mutation and syncing the counter.
    ///
    /// Returns `false` without touching anything when the id is absent.
    pub fn remove_project(&mut self, project_id: &str, now: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != project_id);
        if self.projects.len() == before {
            return false;
        }
        self.recent_project_ids.retain(|id| id != project_id);
        self.stats.projects = self.projects.len() as u32;
        self.touch(now);
        true
    }

    /// Move a project id to the front of `recent_project_ids`.
    ///
    /// Re-touching an id that is already present moves it instead of
    /// duplicating it; the list is then truncated to its cap.
    pub fn touch_recent_project(&mut self, project_id: &str, now: &str) {
        self.recent_project_ids.retain(|id| id != project_id);
        self.recent_project_ids.insert(0, project_id.to_string());
        self.recent_project_ids.truncate(MAX_RECENT_PROJECTS);
        self.touch(now);
    }

    // ─── Activity log ────────────────────────────────────────────

    /// Prepend an activity entry, evicting the oldest past the cap.
    pub fn push_activity(&mut self, entry: ActivityEntry, now: &str) {
        self.recent_activity.insert(0, entry);
        self.recent_activity.truncate(MAX_RECENT_ACTIVITY);
        self.touch(now);
    }

    // ─── Follow edges ────────────────────────────────────────────

    /// Record that `user_id` follows this profile. Duplicate-safe.
    ///
    /// Returns `true` if the edge was newly added.
    pub fn add_follower(&mut self, user_id: &str, now: &str) -> bool {
        if self.followers.iter().any(|id| id == user_id) {
            return false;
        }
        self.followers.push(user_id.to_string());
        self.stats.followers = self.followers.len() as u32;
        self.touch(now);
        true
    }

    /// Remove the incoming edge from `user_id`, if present.
    pub fn remove_follower(&mut self, user_id: &str, now: &str) -> bool {
        let before = self.followers.len();
        self.followers.retain(|id| id != user_id);
        if self.followers.len() == before {
            return false;
        }
        self.stats.followers = self.followers.len() as u32;
        self.touch(now);
        true
    }

    /// Record that this profile follows `user_id`. Duplicate-safe.
    pub fn add_following(&mut self, user_id: &str, now: &str) -> bool {
        if self.following.iter().any(|id| id == user_id) {
            return false;
        }
        self.following.push(user_id.to_string());
        self.stats.following = self.following.len() as u32;
        self.touch(now);
        true
    }

    /// Remove the outgoing edge to `user_id`, if present.
    pub fn remove_following(&mut self, user_id: &str, now: &str) -> bool {
        let before = self.following.len();
        self.following.retain(|id| id != user_id);
        if self.following.len() == before {
            return false;
        }
        self.stats.following = self.following.len() as u32;
        self.touch(now);
        true
    }

    // ─── Repair ──────────────────────────────────────────────────

    /// Re-derive every counter from its backing collection.
    ///
    /// Returns `true` if any counter had drifted. `likes` is left alone:
    /// it has no backing collection.
    pub fn recount_stats(&mut self) -> bool {
        let recounted = ProfileStats {
            followers: self.followers.len() as u32,
            following: self.following.len() as u32,
            projects: self.projects.len() as u32,
            likes: self.stats.likes,
        };
        if recounted == self.stats {
            return false;
        }
        self.stats = recounted;
        true
    }
}
