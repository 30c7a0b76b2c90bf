use async_trait::async_trait;
use tracing::{error, info};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hard delete. The profile and every enrollment, view, certificate and
/// review hanging off it go with the user.
#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError>;
}

#[derive(Debug, Clone)]
pub struct DeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteUserUseCase for DeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError> {
        match self.repository.delete_user(user_id).await {
            Ok(()) => {
                info!("User deleted: {}", user_id);
                Ok(())
            }
            Err(UserRepositoryError::UserNotFound) => Err(DeleteUserError::UserNotFound),
            Err(e) => {
                error!("Failed to delete user {}: {}", user_id, e);
                Err(DeleteUserError::RepositoryError(e.to_string()))
            }
        }
    }
}
