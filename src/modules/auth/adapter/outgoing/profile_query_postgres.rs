use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Profile, UserId};
use crate::auth::application::ports::outgoing::profile_query::{ProfileQuery, ProfileQueryError};

use super::sea_orm_entity::profiles::{
    Column as ProfileColumn, Entity as ProfileEntity, Model as ProfileModel,
};

#[derive(Clone, Debug)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Profile>, ProfileQueryError> {
        let model = ProfileEntity::find()
            .filter(ProfileColumn::UserId.eq(Uuid::from(user_id)))
            .one(&*self.db)
            .await
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(ProfileModel::to_domain))
    }
}
