// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod activity;
pub mod meetings;
pub mod profile;
pub mod projects;
pub mod quick_actions;
pub mod skills;
pub mod social;

pub use activity::{ActivityService, NewActivity};
pub use meetings::{MeetingPatch, MeetingService, NewMeeting};
pub use profile::{ProfilePatch, ProfileService, ReconcileReport};
pub use projects::{NewProject, ProjectPatch, ProjectService};
pub use quick_actions::{NewQuickAction, QuickActionPatch, QuickActionService};
pub use skills::{NewSkill, SkillPatch, SkillService};
pub use social::{FollowOutcome, SocialService};
