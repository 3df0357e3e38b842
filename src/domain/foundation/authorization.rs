//! Role-based authorization primitives.
//!
//! Each gated route declares a [`RoleRequirement`]; a single guard in the HTTP
//! layer evaluates it against the caller's stored role. Handlers never
//! hand-roll role checks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform role attached to a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular participant: joins clubs, registers for events.
    Member,
    /// Runs clubs and their events.
    Manager,
    /// Moderates the whole catalog and assigns roles.
    Admin,
}

impl Role {
    /// Stable string form used in the database and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "member" => Ok(Role::Member),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Declared access requirement for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Any authenticated caller with a user record.
    Authenticated,
    /// Exactly this role.
    Exactly(Role),
    /// This role, or admin. Admin moderation paths (club approval, deletes)
    /// cut across ownership.
    AtLeast(Role),
}

impl RoleRequirement {
    /// Evaluates the requirement against a caller's role.
    pub fn satisfied_by(&self, role: Role) -> bool {
        match self {
            RoleRequirement::Authenticated => true,
            RoleRequirement::Exactly(required) => role == *required,
            RoleRequirement::AtLeast(required) => role == *required || role == Role::Admin,
        }
    }
}

impl fmt::Display for RoleRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleRequirement::Authenticated => write!(f, "authenticated"),
            RoleRequirement::Exactly(role) => write!(f, "{}", role),
            RoleRequirement::AtLeast(role) => write!(f, "{} or admin", role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrips_through_strings() {
        for role in [Role::Member, Role::Manager, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn authenticated_accepts_any_role() {
        for role in [Role::Member, Role::Manager, Role::Admin] {
            assert!(RoleRequirement::Authenticated.satisfied_by(role));
        }
    }

    #[test]
    fn exactly_requires_exact_match() {
        let req = RoleRequirement::Exactly(Role::Admin);
        assert!(req.satisfied_by(Role::Admin));
        assert!(!req.satisfied_by(Role::Manager));
        assert!(!req.satisfied_by(Role::Member));
    }

    #[test]
    fn at_least_admits_admin() {
        let req = RoleRequirement::AtLeast(Role::Manager);
        assert!(req.satisfied_by(Role::Manager));
        assert!(req.satisfied_by(Role::Admin));
        assert!(!req.satisfied_by(Role::Member));
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
    }
}
