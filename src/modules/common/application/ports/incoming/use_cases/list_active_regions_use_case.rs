use async_trait::async_trait;
use uuid::Uuid;

use crate::common::application::domain::entities::Region;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListActiveRegionsError {
    #[error("Country not found")]
    CountryNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListActiveRegionsUseCase: Send + Sync {
    async fn execute(&self, country_id: Uuid) -> Result<Vec<Region>, ListActiveRegionsError>;
}
