// SPDX-License-Identifier: MIT

//! Project entries in a user's portfolio.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    OnHold,
}

/// A project stored inside a profile document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Generated project ID (UUID v4)
    pub id: String,
    /// Project title
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Related links (repository, demo, docs)
    #[serde(default)]
    pub links: Vec<String>,
    /// Cover image URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
    /// Last modification timestamp (ISO 8601)
    pub updated_at: String,
}
