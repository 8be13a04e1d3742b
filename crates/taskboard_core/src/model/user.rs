//! User profile model.

use serde::{Deserialize, Serialize};

/// Identifier of a user profile (e.g. `u1`).
///
/// Kept as a type alias since ids come verbatim from seed data.
pub type UserId = String;

/// Base directory prepended to avatar file names.
pub const DEFAULT_AVATAR_BASE: &str = "assets/users";

/// Selectable user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name shown on the user card and the task list heading.
    pub name: String,
    /// Avatar file name relative to the avatar base directory.
    pub avatar: String,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
        }
    }

    /// Returns the avatar image path under `base`.
    ///
    /// A trailing `/` on `base` is not duplicated; an empty base yields the
    /// bare avatar file name.
    pub fn image_path(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        if base.is_empty() {
            return self.avatar.clone();
        }
        format!("{base}/{}", self.avatar)
    }
}
