//! Active user selection.

use crate::model::user::UserId;
use log::debug;

/// Currently active user id; `None` until a user is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSelection {
    current: Option<UserId>,
}

impl UserSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active user. The id is not checked against any directory.
    pub fn select(&mut self, user_id: impl Into<UserId>) {
        let user_id = user_id.into();
        debug!("event=user_selected module=view user_id={user_id}");
        self.current = Some(user_id);
    }

    pub fn current(&self) -> Option<&UserId> {
        self.current.as_ref()
    }

    pub fn is_selected(&self, user_id: &str) -> bool {
        self.current.as_deref() == Some(user_id)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
