//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EmailAddress, Role};
use crate::domain::user::User;

/// Outcome of an upsert-by-email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new user row was created.
    Created,
    /// A user with this email already existed; nothing changed.
    Existing,
}

/// Port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user unless a row with the same email exists.
    async fn upsert(&self, user: &User) -> Result<UpsertOutcome, DomainError>;

    /// Finds a user by their unique email.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DomainError>;

    /// Sets the role of the user with the given email.
    ///
    /// Fails with `UserNotFound` when no such user exists.
    async fn set_role(&self, email: &EmailAddress, role: Role) -> Result<(), DomainError>;
}
