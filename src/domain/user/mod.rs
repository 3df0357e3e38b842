//! User aggregate.
//!
//! Users are created on first sign-in with the `member` role; only an admin
//! action mutates the role afterwards.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, Role, Timestamp, UserId};

/// A platform user, keyed by unique email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub role: Role,
    pub created_at: Timestamp,
}

impl User {
    /// Registers a new user with the default `member` role.
    pub fn register(email: EmailAddress) -> Self {
        Self {
            id: UserId::new(),
            email,
            role: Role::Member,
            created_at: Timestamp::now(),
        }
    }

    /// Replaces the user's role. Admin-only at the API layer.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}
