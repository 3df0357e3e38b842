//! JSON DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Role;
use crate::domain::user::User;

/// Request to upsert a user by email (first sign-in path).
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertUserRequest {
    pub email: String,
}

/// Request to assign a role.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRoleRequest {
    pub role: Role,
}

/// A user record as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.to_string(),
            role: user.role,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}
