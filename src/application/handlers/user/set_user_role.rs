//! SetUserRoleHandler - admin-only role assignment.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress, Role};
use crate::ports::UserRepository;

/// Command to set a user's role by email.
#[derive(Debug, Clone)]
pub struct SetUserRoleCommand {
    pub email: EmailAddress,
    pub role: Role,
}

/// Handler for the admin role-assignment path.
pub struct SetUserRoleHandler {
    users: Arc<dyn UserRepository>,
}

impl SetUserRoleHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: SetUserRoleCommand) -> Result<(), DomainError> {
        self.users.set_role(&cmd.email, cmd.role).await
    }
}
