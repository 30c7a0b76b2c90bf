use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::common::application::{
    domain::entities::{Country, Region},
    ports::outgoing::{CreateCountryData, CreateRegionData, GeoRepository, GeoRepositoryError},
};
use crate::shared::db_error::{constraint_violation, ConstraintViolation};

use super::sea_orm_entity::{countries, regions};

#[derive(Debug, Clone)]
pub struct GeoRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GeoRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GeoRepository for GeoRepositoryPostgres {
    async fn create_country(&self, data: CreateCountryData) -> Result<Country, GeoRepositoryError> {
        let active = countries::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            code: Set(data.code.as_str().to_string()),
            is_active: Set(data.is_active),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| GeoRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn create_region(&self, data: CreateRegionData) -> Result<Region, GeoRepositoryError> {
        let active = regions::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            soato: Set(data.soato),
            country_id: Set(data.country_id),
            is_active: Set(data.is_active),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            match constraint_violation(&e) {
                Some(ConstraintViolation::Unique) => GeoRepositoryError::SoatoTaken,
                Some(ConstraintViolation::ForeignKey) => {
                    warn!("Region insert rejected, unknown country {}", data.country_id);
                    GeoRepositoryError::CountryNotFound
                }
                None => GeoRepositoryError::DatabaseError(e.to_string()),
            }
        })?;

        Ok(inserted.to_domain())
    }

    async fn delete_country(&self, country_id: Uuid) -> Result<(), GeoRepositoryError> {
        let result = countries::Entity::delete_by_id(country_id)
            .exec(&*self.db)
            .await
            .map_err(|e| GeoRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(GeoRepositoryError::CountryNotFound);
        }

        Ok(())
    }
}
