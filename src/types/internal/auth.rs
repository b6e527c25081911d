use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization tier for a user account
///
/// Closed enumeration: unknown role strings are rejected at the input
/// boundary instead of being defaulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Database/wire representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// Parse a role string, returning `None` for unknown values
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT Claims structure
///
/// `sub` and `role` are the only fields the access guard may trust from a
/// decoded token; any other user attribute must be re-fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Authorization tier carried in the session
    pub role: Role,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Verified identity returned by credential verification
///
/// Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}
