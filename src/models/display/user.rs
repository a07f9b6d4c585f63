//! User display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{ResourceId, User};

/// User row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "USER ID")]
    pub id: ResourceId,

    #[tabled(rename = "LOGIN")]
    pub login: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ROLE")]
    pub role: String,

    #[tabled(rename = "ENABLED")]
    pub enabled: bool,

    #[tabled(rename = "LOCKED")]
    pub locked: bool,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        let role = if user.role.id.is_empty() {
            "--".to_string()
        } else {
            user.role.id
        };

        Self {
            id: user.id,
            login: user.login,
            name: user.name,
            role,
            enabled: user.enabled,
            locked: user.locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::user;

    #[test]
    fn test_user_display_without_role() {
        let display = UserDisplay::from(user(3, "jdoe"));
        assert_eq!(display.login, "jdoe");
        assert_eq!(display.role, "--");
        assert!(display.enabled);
    }
}
