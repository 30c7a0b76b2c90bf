use async_trait::async_trait;

use crate::auth::application::domain::entities::{PhoneNumber, User, UserId};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub phone_number: PhoneNumber,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub password_set: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
}

/// Full replacement of the editable account fields.
#[derive(Debug, Clone)]
pub struct UpdateUserData {
    pub phone_number: PhoneNumber,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User with this phone number already exists.")]
    PhoneNumberTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError>;

    /// Stores a new hash, marks the password as set and stamps
    /// `password_changed_at`.
    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<User, UserRepositoryError>;

    async fn record_login(&self, user_id: UserId) -> Result<(), UserRepositoryError>;

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
