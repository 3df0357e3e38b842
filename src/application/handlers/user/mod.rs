//! User command handlers.

mod set_user_role;
mod upsert_user;

pub use set_user_role::{SetUserRoleCommand, SetUserRoleHandler};
pub use upsert_user::{UpsertUserCommand, UpsertUserHandler, UpsertUserResult};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, Role};
    use crate::domain::user::User;
    use crate::ports::{UpsertOutcome, UserRepository};

    /// In-memory user store keyed by email.
    pub struct MockUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self { users: Mutex::new(Vec::new()) }
        }

        pub fn with_user(user: User) -> Self {
            Self { users: Mutex::new(vec![user]) }
        }

        pub fn stored(&self) -> Vec<User> {
            self.users.lock().unwrap().clone()
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

        async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DomainError> {
            Ok(self.users.lock().unwrap().iter().find(|u| &u.email == email).cloned())
        }

        async fn set_role(&self, email: &EmailAddress, role: Role) -> Result<(), DomainError> {
            let mut users = self.users.lock().unwrap();
            match users.iter_mut().find(|u| &u.email == email) {
                Some(user) => {
                    user.role = role;
                    Ok(())
                }
                None => Err(DomainError::new(ErrorCode::UserNotFound, "User not found")),
            }
        }
    }
}
