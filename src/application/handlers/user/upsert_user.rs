//! UpsertUserHandler - creates a user on first sign-in, no-op afterwards.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress};
use crate::domain::user::User;
use crate::ports::{UpsertOutcome, UserRepository};

/// Command to upsert a user by email.
#[derive(Debug, Clone)]
pub struct UpsertUserCommand {
    pub email: EmailAddress,
}

/// Result of an upsert: the stored user and whether it was just created.
#[derive(Debug, Clone)]
pub struct UpsertUserResult {
    pub user: User,
    pub created: bool,
}

/// Handler for the upsert-by-email sign-in path.
pub struct UpsertUserHandler {
    users: Arc<dyn UserRepository>,
}

impl UpsertUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: UpsertUserCommand) -> Result<UpsertUserResult, DomainError> {
        let candidate = User::register(cmd.email.clone());
        let outcome = self.users.upsert(&candidate).await?;

        match outcome {
            UpsertOutcome::Created => Ok(UpsertUserResult { user: candidate, created: true }),
            UpsertOutcome::Existing => {
                // Return the stored row so the caller sees the real role.
                let user = self
                    .users
                    .find_by_email(&cmd.email)
                    .await?
                    .ok_or_else(|| {
                        DomainError::new(
                            crate::domain::foundation::ErrorCode::InternalError,
                            "User vanished between upsert and read",
                        )
                    })?;
                Ok(UpsertUserResult { user, created: false })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Role;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl MockUserRepository {
        fn new() -> Self {
            Self { users: Mutex::new(Vec::new()) }
        }

        fn with_user(user: User) -> Self {
            Self { users: Mutex::new(vec![user]) }
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn upsert(&self, user: &User) -> Result<UpsertOutcome, DomainError> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email == user.email) {
                return Ok(UpsertOutcome::Existing);
            }
            users.push(user.clone());
            Ok(UpsertOutcome::Created)
        }

        async fn find_by_email(
            &self,
            email: &EmailAddress,
        ) -> Result<Option<User>, DomainError> {
            Ok(self.users.lock().unwrap().iter().find(|u| &u.email == email).cloned())
        }

        async fn set_role(&self, _email: &EmailAddress, _role: Role) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn email() -> EmailAddress {
        EmailAddress::parse("alice@example.com").unwrap()
    }

    #[tokio::test]
    async fn first_sign_in_creates_member() {
        let handler = UpsertUserHandler::new(Arc::new(MockUserRepository::new()));

        let result = handler.handle(UpsertUserCommand { email: email() }).await.unwrap();

        assert!(result.created);
        assert_eq!(result.user.role, Role::Member);
    }

    #[tokio::test]
    async fn second_sign_in_returns_existing_role() {
        let existing = User::register(email()).with_role(Role::Manager);
        let handler = UpsertUserHandler::new(Arc::new(MockUserRepository::with_user(existing)));

        let result = handler.handle(UpsertUserCommand { email: email() }).await.unwrap();

        assert!(!result.created);
        assert_eq!(result.user.role, Role::Manager);
    }
}
