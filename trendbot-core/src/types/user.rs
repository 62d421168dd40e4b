//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Name shown to other users: first name, then username, then `fallback`.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.first_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.username.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: Option<&str>, first_name: Option<&str>) -> User {
        User {
            id: 1,
            username: username.map(String::from),
            first_name: first_name.map(String::from),
            last_name: None,
        }
    }

    #[test]
    fn display_name_prefers_first_name() {
        assert_eq!(user(Some("alice"), Some("Alice")).display_name("Someone"), "Alice");
        assert_eq!(user(Some("alice"), None).display_name("Someone"), "alice");
        assert_eq!(user(Some("alice"), Some("")).display_name("Someone"), "alice");
        assert_eq!(user(None, None).display_name("Someone"), "Someone");
    }
}
