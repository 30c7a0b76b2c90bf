use async_trait::async_trait;
use tracing::{error, info};

use crate::auth::application::domain::entities::{Profile, UserId};
use crate::auth::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};
use crate::auth::application::use_cases::profile_command::ProfileCommand;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Position or region not found")]
    ReferenceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Replaces every profile field with the command's values.
#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: ProfileCommand,
    ) -> Result<Profile, UpdateProfileError>;
}

#[derive(Debug, Clone)]
pub struct UpdateProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: ProfileCommand,
    ) -> Result<Profile, UpdateProfileError> {
        self.repository
            .update_profile(user_id, command.into_data())
            .await
            .map(|profile| {
                info!("Profile updated for user {}", user_id);
                profile
            })
            .map_err(|e| match e {
                ProfileRepositoryError::ProfileNotFound => UpdateProfileError::ProfileNotFound,
                ProfileRepositoryError::ReferenceNotFound => UpdateProfileError::ReferenceNotFound,
                other => {
                    error!("Failed to update profile for {}: {}", user_id, other);
                    UpdateProfileError::RepositoryError(other.to_string())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::ProfileData;

    struct MissingProfileRepository;

    #[async_trait]
    impl ProfileRepository for MissingProfileRepository {
        async fn create_profile(
            &self,
            _user_id: UserId,
            _data: ProfileData,
        ) -> Result<Profile, ProfileRepositoryError> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            _user_id: UserId,
            _data: ProfileData,
        ) -> Result<Profile, ProfileRepositoryError> {
            Err(ProfileRepositoryError::ProfileNotFound)
        }
    }

    #[tokio::test]
    async fn update_without_profile_fails() {
        let use_case = UpdateProfileUseCase::new(MissingProfileRepository);

        let result = use_case.execute(UserId::new(), ProfileCommand::new()).await;

        assert_eq!(result.unwrap_err(), UpdateProfileError::ProfileNotFound);
    }
}
