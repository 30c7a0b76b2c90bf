use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError,
};
use crate::shared::db_error::is_unique_violation;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // The only unique column on `users` besides the key is the phone number
    fn map_write_error(e: DbErr) -> UserRepositoryError {
        if is_unique_violation(&e) {
            return UserRepositoryError::PhoneNumberTaken;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    async fn load(&self, user_id: UserId) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(Uuid::from(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            phone_number: Set(data.phone_number.as_str().to_string()),
            email: Set(data.email),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            password_hash: Set(data.password_hash),
            is_staff: Set(data.is_staff),
            is_active: Set(data.is_active),
            is_superuser: Set(data.is_superuser),
            password_set: Set(data.password_set),
            password_changed_at: Set(None),
            last_login: Set(None),
            ..Default::default()
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.to_domain())
    }

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?.into_active_model();

        active_user.phone_number = Set(data.phone_number.as_str().to_string());
        active_user.email = Set(data.email);
        active_user.first_name = Set(data.first_name);
        active_user.last_name = Set(data.last_name);
        active_user.is_staff = Set(data.is_staff);
        active_user.is_active = Set(data.is_active);
        active_user.is_superuser = Set(data.is_superuser);

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(updated.to_domain())
    }

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?.into_active_model();

        active_user.password_hash = Set(new_password_hash);
        active_user.password_set = Set(true);
        active_user.password_changed_at = Set(Some(Utc::now().fixed_offset()));

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_domain())
    }

    async fn record_login(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::LastLogin, Expr::value(Utc::now().fixed_offset()))
            .filter(UserColumn::Id.eq(Uuid::from(user_id)))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(Uuid::from(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}
