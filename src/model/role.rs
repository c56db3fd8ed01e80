use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Access role carried by the login response and the stored session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Manager,
    Employee,
}

impl Role {
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "MANAGER" => Some(Role::Manager),
            "EMPLOYEE" => Some(Role::Employee),
            _ => None,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Role::Manager => "MANAGER",
            Role::Employee => "EMPLOYEE",
        }
    }

    pub fn is_manager(self) -> bool {
        matches!(self, Role::Manager)
    }
}
