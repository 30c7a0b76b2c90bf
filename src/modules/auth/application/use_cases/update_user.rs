use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::{PhoneNumber, User, UserId};
use crate::auth::application::helpers::{PhoneNumberGuard, PhoneNumberGuardError};
use crate::auth::application::ports::outgoing::{
    UpdateUserData, UserQuery, UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::create_user::normalize_email;

/// Partial update of account fields; untouched fields keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    user_id: UserId,
    phone_number: Option<PhoneNumber>,
    email: Option<Option<String>>,
    first_name: Option<String>,
    last_name: Option<String>,
    is_staff: Option<bool>,
    is_active: Option<bool>,
    is_superuser: Option<bool>,
}

impl UpdateUserCommand {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            phone_number: None,
            email: None,
            first_name: None,
            last_name: None,
            is_staff: None,
            is_active: None,
            is_superuser: None,
        }
    }

    pub fn with_phone_number(mut self, phone_number: &str) -> Result<Self, UpdateUserError> {
        let phone_number = PhoneNumber::new(phone_number)
            .map_err(|e| UpdateUserError::InvalidPhoneNumber(e.to_string()))?;
        self.phone_number = Some(phone_number);
        Ok(self)
    }

    /// Blank input clears the stored email.
    pub fn with_email(mut self, email: &str) -> Result<Self, UpdateUserError> {
        self.email = Some(normalize_email(email).map_err(|_| UpdateUserError::InvalidEmail)?);
        Ok(self)
    }

    pub fn with_first_name(mut self, first_name: &str) -> Self {
        self.first_name = Some(first_name.trim().to_string());
        self
    }

    pub fn with_last_name(mut self, last_name: &str) -> Self {
        self.last_name = Some(last_name.trim().to_string());
        self
    }

    pub fn with_staff(mut self, is_staff: bool) -> Self {
        self.is_staff = Some(is_staff);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = Some(is_superuser);
        self
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    fn apply_to(self, user: User) -> UpdateUserData {
        UpdateUserData {
            phone_number: self.phone_number.unwrap_or(user.phone_number),
            email: self.email.unwrap_or(user.email),
            first_name: self.first_name.unwrap_or(user.first_name),
            last_name: self.last_name.unwrap_or(user.last_name),
            is_staff: self.is_staff.unwrap_or(user.is_staff),
            is_active: self.is_active.unwrap_or(user.is_active),
            is_superuser: self.is_superuser.unwrap_or(user.is_superuser),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("User with this phone number already exists.")]
    PhoneNumberTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError>;
}

#[derive(Clone)]
pub struct UpdateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    phone_guard: PhoneNumberGuard,
}

impl<Q, R> UpdateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, phone_guard: PhoneNumberGuard) -> Self {
        Self {
            query,
            repository,
            phone_guard,
        }
    }
}

#[async_trait]
impl<Q, R> IUpdateUserUseCase for UpdateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError> {
        let user_id = command.user_id();

        let current = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| UpdateUserError::RepositoryError(e.to_string()))?
            .ok_or(UpdateUserError::UserNotFound)?;

        let data = command.apply_to(current);

        self.phone_guard
            .ensure_available(&data.phone_number, Some(user_id))
            .await
            .map_err(|e| match e {
                PhoneNumberGuardError::Taken => {
                    warn!("User {} tried to take phone number {}", user_id, data.phone_number);
                    UpdateUserError::PhoneNumberTaken
                }
                PhoneNumberGuardError::RepositoryError(msg) => UpdateUserError::RepositoryError(msg),
            })?;

        match self.repository.update_user(user_id, data).await {
            Ok(user) => {
                info!("User updated: {}", user.id);
                Ok(user)
            }
            Err(UserRepositoryError::PhoneNumberTaken) => Err(UpdateUserError::PhoneNumberTaken),
            Err(UserRepositoryError::UserNotFound) => Err(UpdateUserError::UserNotFound),
            Err(e) => {
                error!("Failed to update user {}: {}", user_id, e);
                Err(UpdateUserError::RepositoryError(e.to_string()))
            }
        }
    }
}
