use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Gender, Profile, UserId};
use crate::shared::storage::StoredFile;

#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    pub position_id: Option<Uuid>,
    pub region_id: Option<Uuid>,
    pub avatar: Option<StoredFile>,
    pub postal_code: Option<u32>,
    pub address: Option<String>,
    pub instagram_username: Option<String>,
    pub linkedin_username: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub work_place: Option<String>,
    pub about: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile already exists for this user")]
    ProfileAlreadyExists,

    #[error("Profile not found")]
    ProfileNotFound,

    /// User, position or region the profile points at does not exist.
    #[error("Referenced record not found")]
    ReferenceNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create_profile(
        &self,
        user_id: UserId,
        data: ProfileData,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn update_profile(
        &self,
        user_id: UserId,
        data: ProfileData,
    ) -> Result<Profile, ProfileRepositoryError>;
}
