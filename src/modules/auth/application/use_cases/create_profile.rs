use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::{Profile, UserId};
use crate::auth::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};
use crate::auth::application::use_cases::profile_command::ProfileCommand;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProfileError {
    #[error("Profile already exists for this user")]
    ProfileAlreadyExists,

    #[error("User, position or region not found")]
    ReferenceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: ProfileCommand,
    ) -> Result<Profile, CreateProfileError>;
}

#[derive(Debug, Clone)]
pub struct CreateProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateProfileUseCase for CreateProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: ProfileCommand,
    ) -> Result<Profile, CreateProfileError> {
        match self
            .repository
            .create_profile(user_id, command.into_data())
            .await
        {
            Ok(profile) => {
                info!("Profile created for user {}", user_id);
                Ok(profile)
            }
            Err(ProfileRepositoryError::ProfileAlreadyExists) => {
                warn!("User {} already has a profile", user_id);
                Err(CreateProfileError::ProfileAlreadyExists)
            }
            Err(ProfileRepositoryError::ReferenceNotFound) => {
                Err(CreateProfileError::ReferenceNotFound)
            }
            Err(e) => {
                error!("Failed to create profile for {}: {}", user_id, e);
                Err(CreateProfileError::RepositoryError(e.to_string()))
            }
        }
    }
}
