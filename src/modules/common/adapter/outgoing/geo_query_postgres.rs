use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::common::application::{
    domain::entities::{Country, Region},
    ports::outgoing::{GeoQuery, GeoQueryError},
};

use super::sea_orm_entity::{countries, regions};

#[derive(Debug, Clone)]
pub struct GeoQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GeoQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GeoQuery for GeoQueryPostgres {
    async fn find_country(&self, country_id: Uuid) -> Result<Option<Country>, GeoQueryError> {
        let model = countries::Entity::find_by_id(country_id)
            .one(&*self.db)
            .await
            .map_err(|e| GeoQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(countries::Model::to_domain))
    }

    async fn list_active_regions(&self, country_id: Uuid) -> Result<Vec<Region>, GeoQueryError> {
        let models = regions::Entity::find()
            .filter(regions::Column::CountryId.eq(country_id))
            .filter(regions::Column::IsActive.eq(true))
            .order_by_asc(regions::Column::Name)
            .all(&*self.db)
            .await
            .map_err(|e| GeoQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(regions::Model::to_domain).collect())
    }
}
