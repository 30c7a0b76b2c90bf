use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::common::application::{
    domain::entities::Region,
    ports::{
        incoming::use_cases::{CreateRegionCommand, CreateRegionError, CreateRegionUseCase},
        outgoing::{CreateRegionData, GeoRepository, GeoRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct CreateRegionService<R>
where
    R: GeoRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateRegionService<R>
where
    R: GeoRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateRegionUseCase for CreateRegionService<R>
where
    R: GeoRepository + Send + Sync,
{
    async fn execute(&self, command: CreateRegionCommand) -> Result<Region, CreateRegionError> {
        let data = CreateRegionData {
            country_id: command.country_id(),
            name: command.name().to_string(),
            soato: command.soato().to_string(),
            is_active: command.is_active(),
        };

        match self.repository.create_region(data).await {
            Ok(region) => {
                info!("Region created: {} (soato {})", region.name, region.soato);
                Ok(region)
            }
            Err(GeoRepositoryError::SoatoTaken) => {
                warn!("Region soato already taken: {}", command.soato());
                Err(CreateRegionError::SoatoTaken)
            }
            Err(GeoRepositoryError::CountryNotFound) => {
                warn!("Region references missing country {}", command.country_id());
                Err(CreateRegionError::CountryNotFound)
            }
            Err(e) => {
                error!("Failed to create region: {}", e);
                Err(CreateRegionError::RepositoryError(e.to_string()))
            }
        }
    }
}
