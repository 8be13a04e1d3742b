//! Seed user directory.

use crate::model::user::User;

/// Ordered, read-only set of users supplied at startup.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Creates a directory preserving the given order.
    ///
    /// Duplicate ids are not rejected here; `seed::SeedData::parse` does that
    /// for external input. Lookups return the first match.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn get(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == user_id)
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.get(user_id).is_some()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::UserDirectory;
    use crate::model::user::User;

    #[test]
    fn lookup_by_id() {
        let directory = UserDirectory::new(vec![
            User::new("u1", "Ada", "user-1.jpg"),
            User::new("u2", "Brook", "user-2.jpg"),
        ]);

        assert_eq!(directory.get("u2").map(|user| user.name.as_str()), Some("Brook"));
        assert!(directory.contains("u1"));
        assert!(!directory.contains("u3"));
        assert_eq!(directory.len(), 2);
    }
}
