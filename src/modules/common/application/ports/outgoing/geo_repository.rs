use async_trait::async_trait;
use uuid::Uuid;

use crate::common::application::domain::entities::{Country, CountryCode, Region};

#[derive(Debug, Clone)]
pub struct CreateCountryData {
    pub name: String,
    pub code: CountryCode,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct CreateRegionData {
    pub country_id: Uuid,
    pub name: String,
    pub soato: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GeoRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Country not found")]
    CountryNotFound,

    #[error("Region with this soato already exists")]
    SoatoTaken,
}

#[async_trait]
pub trait GeoRepository: Send + Sync {
    async fn create_country(&self, data: CreateCountryData) -> Result<Country, GeoRepositoryError>;

    async fn create_region(&self, data: CreateRegionData) -> Result<Region, GeoRepositoryError>;

    /// Removes the country together with its regions (and their profiles).
    async fn delete_country(&self, country_id: Uuid) -> Result<(), GeoRepositoryError>;
}
