// SPDX-License-Identifier: MIT

//! ProfileHub: user-profile platform core.
//!
//! This crate owns the profile document store: canonical per-user profile
//! documents with nested collections (projects, skills, meetings, quick
//! actions, activity log), derived counters, bounded recency lists, and
//! mirrored follow relationships, persisted as a single JSON document.
//!
//! Authentication and HTTP framing live outside this crate; callers hand
//! every operation an already-verified user identifier.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use db::ProfileStore;
use services::{
    ActivityService, MeetingService, ProfileService, ProjectService, QuickActionService,
    SkillService, SocialService,
};

/// Shared application state: one backing store and the service stack on
/// top of it. All services share the store's write lock.
pub struct AppState {
    pub config: Config,
    pub store: ProfileStore,
    pub profiles: ProfileService,
    pub projects: ProjectService,
    pub skills: SkillService,
    pub meetings: MeetingService,
    pub quick_actions: QuickActionService,
    pub activity: ActivityService,
    pub social: SocialService,
}

impl AppState {
    /// Build the full service stack over one backing store.
    pub fn new(config: Config) -> Self {
        let store = ProfileStore::new(config.data_path.clone());
        Self {
            profiles: ProfileService::new(store.clone()),
            projects: ProjectService::new(store.clone()),
            skills: SkillService::new(store.clone()),
            meetings: MeetingService::new(store.clone()),
            quick_actions: QuickActionService::new(store.clone()),
            activity: ActivityService::new(store.clone()),
            social: SocialService::new(store.clone()),
            store,
            config,
        }
    }
}
