//! Message role discriminator
//!
//! The role only changes presentation styling, never parsing.

use serde::{Deserialize, Serialize};

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[default]
    Assistant,
}

impl Role {
    /// Header label shown above the message
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("unknown role '{}', expected 'user' or 'assistant'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [Role::User, Role::Assistant] {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
        assert_eq!("  USER ".parse::<Role>(), Ok(Role::User));
        assert!("tutor".parse::<Role>().is_err());
    }
}
