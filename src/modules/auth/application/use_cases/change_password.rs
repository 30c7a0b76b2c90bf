use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::{PasswordPolicy, PasswordPolicyError};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Weak password: {0}")]
    WeakPassword(PasswordPolicyError),

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, new_password: &str)
        -> Result<(), ChangePasswordError>;
}

#[derive(Clone)]
pub struct ChangePasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<R> ChangePasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<R> IChangePasswordUseCase for ChangePasswordUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        new_password: &str,
    ) -> Result<(), ChangePasswordError> {
        self.password_policy.validate(new_password).map_err(|e| {
            warn!("Rejected new password for {}: {}", user_id, e);
            ChangePasswordError::WeakPassword(e)
        })?;

        let hash = self
            .hasher
            .hash_password(new_password)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        match self.repository.update_password(user_id, hash).await {
            Ok(_) => {
                info!("Password changed for user {}", user_id);
                Ok(())
            }
            Err(UserRepositoryError::UserNotFound) => Err(ChangePasswordError::UserNotFound),
            Err(e) => {
                error!("Failed to store password for {}: {}", user_id, e);
                Err(ChangePasswordError::RepositoryError(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::unusable_password;
    use crate::auth::application::services::password::BasicPasswordPolicy;
    use crate::tests::support::stubs::{sample_user, InMemoryUsers, PlainHasher};

    fn use_case(users: InMemoryUsers) -> ChangePasswordUseCase<InMemoryUsers> {
        ChangePasswordUseCase::new(
            users,
            Arc::new(PlainHasher),
            Arc::new(BasicPasswordPolicy::new()),
        )
    }

    #[tokio::test]
    async fn change_password_marks_password_as_set() {
        let mut user = sample_user("+998901234567");
        user.password_hash = unusable_password();
        user.password_set = false;
        let user_id = user.id;
        let users = InMemoryUsers::with_users(vec![user]);

        use_case(users.clone())
            .execute(user_id, "newSecret1")
            .await
            .unwrap();

        let stored = &users.snapshot()[0];
        assert_eq!(stored.password_hash, "plain$newSecret1");
        assert!(stored.password_set);
        assert!(stored.password_changed_at.is_some());
    }

    #[tokio::test]
    async fn change_password_enforces_policy() {
        let user = sample_user("+998901234567");
        let user_id = user.id;

        let result = use_case(InMemoryUsers::with_users(vec![user]))
            .execute(user_id, "abc")
            .await;

        assert_eq!(
            result.unwrap_err(),
            ChangePasswordError::WeakPassword(PasswordPolicyError::TooShort { min: 5 })
        );
    }

    #[tokio::test]
    async fn change_password_for_missing_user() {
        let result = use_case(InMemoryUsers::default())
            .execute(UserId::new(), "newSecret1")
            .await;

        assert_eq!(result.unwrap_err(), ChangePasswordError::UserNotFound);
    }
}
