use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Profile, UserId};
use crate::auth::application::ports::outgoing::profile_repository::{
    ProfileData, ProfileRepository, ProfileRepositoryError,
};
use crate::shared::db_error::{constraint_violation, ConstraintViolation};

use super::sea_orm_entity::profiles::{
    ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as ProfileEntity,
};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(e: DbErr) -> ProfileRepositoryError {
        match constraint_violation(&e) {
            Some(ConstraintViolation::Unique) => ProfileRepositoryError::ProfileAlreadyExists,
            Some(ConstraintViolation::ForeignKey) => ProfileRepositoryError::ReferenceNotFound,
            None => ProfileRepositoryError::DatabaseError(e.to_string()),
        }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn create_profile(
        &self,
        user_id: UserId,
        data: ProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let mut active_profile = ProfileActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(Uuid::from(user_id)),
            ..Default::default()
        };
        active_profile.apply(data);

        let inserted = active_profile
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.to_domain())
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        data: ProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let existing = ProfileEntity::find()
            .filter(ProfileColumn::UserId.eq(Uuid::from(user_id)))
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;

        let mut active_profile = existing.into_active_model();
        active_profile.apply(data);

        let updated = active_profile
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(updated.to_domain())
    }
}
