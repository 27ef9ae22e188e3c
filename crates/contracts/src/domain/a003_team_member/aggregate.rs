use crate::shared::serde_helpers::string_or_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level of a team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessLevel {
    Admin,
    Manager,
    User,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 3] = [AccessLevel::Admin, AccessLevel::Manager, AccessLevel::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Admin => "Admin",
            AccessLevel::Manager => "Manager",
            AccessLevel::User => "User",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == s)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Team member row (`GET /api/team_data`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub phone: String,
    pub email: String,
    pub role: String,
    pub access: AccessLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_team_member() {
        let json = r#"{"id": 3, "name": "Jon Snow", "phone": "0049301234567",
                       "email": "jon@example.com", "role": "Sales", "access": "Manager"}"#;
        let member: TeamMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.id, 3);
        assert_eq!(member.access, AccessLevel::Manager);
    }

    #[test]
    fn test_unknown_access_level_is_rejected() {
        let json = r#"{"id": 3, "name": "Jon Snow", "phone": "1", "email": "jon@example.com",
                       "role": "Sales", "access": "Owner"}"#;
        assert!(serde_json::from_str::<TeamMember>(json).is_err());
    }

    #[test]
    fn test_access_level_round_trips_through_str() {
        for level in AccessLevel::ALL {
            assert_eq!(AccessLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(AccessLevel::parse("admin"), None);
    }
}
