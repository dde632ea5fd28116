//! Quick-action shortcuts on a profile.

use serde::{Deserialize, Serialize};

/// A dashboard shortcut stored inside a profile document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickAction {
    /// Generated action ID (UUID v4)
    pub id: String,
    /// Display title
    pub title: String,
    /// Icon name
    #[serde(default)]
    pub icon: String,
    /// Opaque action identifier interpreted by the client
    #[serde(default)]
    pub action: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
}
