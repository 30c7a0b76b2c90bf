use async_trait::async_trait;
use tracing::{error, info};

use crate::common::application::{
    domain::entities::Country,
    ports::{
        incoming::use_cases::{CreateCountryCommand, CreateCountryError, CreateCountryUseCase},
        outgoing::{CreateCountryData, GeoRepository},
    },
};

#[derive(Debug, Clone)]
pub struct CreateCountryService<R>
where
    R: GeoRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCountryService<R>
where
    R: GeoRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCountryUseCase for CreateCountryService<R>
where
    R: GeoRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCountryCommand) -> Result<Country, CreateCountryError> {
        let data = CreateCountryData {
            name: command.name().to_string(),
            code: command.code().clone(),
            is_active: command.is_active(),
        };

        let country = self.repository.create_country(data).await.map_err(|e| {
            error!("Failed to create country {}: {}", command.code(), e);
            CreateCountryError::RepositoryError(e.to_string())
        })?;

        info!("Country created: {} ({})", country.name, country.code);
        Ok(country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::common::application::{
        domain::entities::{CountryCode, Region},
        ports::outgoing::{CreateRegionData, GeoRepositoryError},
    };
    use crate::shared::timestamps::Timestamps;

    #[derive(Debug, Clone)]
    struct MockGeoRepository {
        fail_with: Option<String>,
    }

    #[async_trait]
    impl GeoRepository for MockGeoRepository {
        async fn create_country(
            &self,
            data: CreateCountryData,
        ) -> Result<Country, GeoRepositoryError> {
            if let Some(msg) = &self.fail_with {
                return Err(GeoRepositoryError::DatabaseError(msg.clone()));
            }
            Ok(Country {
                id: Uuid::new_v4(),
                name: data.name,
                code: data.code,
                is_active: data.is_active,
                timestamps: Timestamps::now(),
            })
        }

        async fn create_region(&self, _data: CreateRegionData) -> Result<Region, GeoRepositoryError> {
            unimplemented!()
        }

        async fn delete_country(&self, _country_id: Uuid) -> Result<(), GeoRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn create_country_passes_normalized_values() {
        let service = CreateCountryService::new(MockGeoRepository { fail_with: None });
        let command = CreateCountryCommand::new("Kazakhstan".to_string(), "kz", Some(false)).unwrap();

        let country = service.execute(command).await.unwrap();

        assert_eq!(country.name, "Kazakhstan");
        assert_eq!(country.code, CountryCode::new("KZ").unwrap());
        assert!(!country.is_active);
    }

    #[tokio::test]
    async fn create_country_maps_repository_error() {
        let service = CreateCountryService::new(MockGeoRepository {
            fail_with: Some("connection lost".to_string()),
        });
        let command = CreateCountryCommand::new("Kazakhstan".to_string(), "KZ", None).unwrap();

        match service.execute(command).await {
            Err(CreateCountryError::RepositoryError(msg)) => assert!(msg.contains("connection lost")),
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
