use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{PhoneNumber, User};
use crate::auth::application::ports::outgoing::{PasswordHasher, UserQuery, UserRepository};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyCredentialsError {
    #[error("Invalid phone number or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IVerifyCredentialsUseCase: Send + Sync {
    /// Returns the active user owning `phone_number` when `password` matches,
    /// and records the login time.
    async fn execute(
        &self,
        phone_number: &str,
        password: &str,
    ) -> Result<User, VerifyCredentialsError>;
}

#[derive(Clone)]
pub struct VerifyCredentialsUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> VerifyCredentialsUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IVerifyCredentialsUseCase for VerifyCredentialsUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        phone_number: &str,
        password: &str,
    ) -> Result<User, VerifyCredentialsError> {
        let phone_number =
            PhoneNumber::new(phone_number).map_err(|_| VerifyCredentialsError::InvalidCredentials)?;

        let mut user = self
            .query
            .find_by_phone_number(&phone_number)
            .await
            .map_err(|e| VerifyCredentialsError::RepositoryError(e.to_string()))?
            .ok_or(VerifyCredentialsError::InvalidCredentials)?;

        if !user.is_active || !user.has_usable_password() {
            warn!("Login refused for user {}", user.id);
            return Err(VerifyCredentialsError::InvalidCredentials);
        }

        let matches = self
            .hasher
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|e| VerifyCredentialsError::HashingFailed(e.to_string()))?;

        if !matches {
            warn!("Wrong password for user {}", user.id);
            return Err(VerifyCredentialsError::InvalidCredentials);
        }

        self.repository
            .record_login(user.id)
            .await
            .map_err(|e| VerifyCredentialsError::RepositoryError(e.to_string()))?;

        user.last_login = Some(Utc::now());
        info!("User logged in: {}", user.id);
        Ok(user)
    }
}
