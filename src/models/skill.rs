//! Skill entries on a profile.

use serde::{Deserialize, Serialize};

/// Self-reported proficiency level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// A skill stored inside a profile document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Generated skill ID (UUID v4)
    pub id: String,
    /// Skill name
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub category: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}
