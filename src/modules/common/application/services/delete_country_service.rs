use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::common::application::ports::{
    incoming::use_cases::{DeleteCountryError, DeleteCountryUseCase},
    outgoing::{GeoRepository, GeoRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCountryService<R>
where
    R: GeoRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteCountryService<R>
where
    R: GeoRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCountryUseCase for DeleteCountryService<R>
where
    R: GeoRepository + Send + Sync,
{
    async fn execute(&self, country_id: Uuid) -> Result<(), DeleteCountryError> {
        match self.repository.delete_country(country_id).await {
            Ok(()) => {
                info!("Country deleted: {}", country_id);
                Ok(())
            }
            Err(GeoRepositoryError::CountryNotFound) => Err(DeleteCountryError::CountryNotFound),
            Err(e) => {
                error!("Failed to delete country {}: {}", country_id, e);
                Err(DeleteCountryError::RepositoryError(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::common::application::{
        domain::entities::{Country, Region},
        ports::outgoing::{CreateCountryData, CreateRegionData},
    };

    #[derive(Clone)]
    struct MockGeoRepository {
        result: Result<(), GeoRepositoryError>,
    }

    #[async_trait]
    impl GeoRepository for MockGeoRepository {
        async fn create_country(
            &self,
            _data: CreateCountryData,
        ) -> Result<Country, GeoRepositoryError> {
            unimplemented!()
        }

        async fn create_region(&self, _data: CreateRegionData) -> Result<Region, GeoRepositoryError> {
            unimplemented!()
        }

        async fn delete_country(&self, _country_id: Uuid) -> Result<(), GeoRepositoryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn delete_country_success() {
        let service = DeleteCountryService::new(MockGeoRepository { result: Ok(()) });
        assert!(service.execute(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn delete_missing_country() {
        let service = DeleteCountryService::new(MockGeoRepository {
            result: Err(GeoRepositoryError::CountryNotFound),
        });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(DeleteCountryError::CountryNotFound)));
    }
}
