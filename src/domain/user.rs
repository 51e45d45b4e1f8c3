/// User profile entity
///
/// Read-only profile data shown in the dashboard greeting and the settings
/// view. The profile is not part of the mutation or statistics logic.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// The signed-in user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Full display name
    pub name: String,
    /// Reference to the avatar image (a path or URL, uninterpreted)
    pub avatar: String,
    /// When the user joined
    pub joined: DateTime<Utc>,
}

impl User {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>, joined: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
            joined,
        }
    }

    /// First name for the dashboard greeting ("Welcome back, ...")
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Join date formatted for the settings view
    pub fn joined_display(&self) -> String {
        self.joined.format("%B %e, %Y").to_string()
    }
}
