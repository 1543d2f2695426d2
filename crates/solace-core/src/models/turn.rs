use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }

    /// Parse the stored string form. Unknown strings are treated as user
    /// turns so a corrupted row never aborts a history load.
    pub fn parse(s: &str) -> Role {
        match s {
            "model" => Role::Model,
            _ => Role::User,
        }
    }
}

/// One immutable message in a session's conversation log.
///
/// Ordered by `created_at` ascending within a session. Roles alternate
/// logically but the store does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: i64,
    pub session_id: String,
    pub role: Role,
    pub content: String,
    /// Marks the turn (and thereby the session) as high-risk.
    pub is_crisis: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_storage_form() {
        assert_eq!(Role::parse(Role::User.as_str()), Role::User);
        assert_eq!(Role::parse(Role::Model.as_str()), Role::Model);
    }

    #[test]
    fn unknown_role_defaults_to_user() {
        assert_eq!(Role::parse("assistant"), Role::User);
    }
}
