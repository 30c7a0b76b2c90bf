use async_trait::async_trait;
use uuid::Uuid;

use crate::common::application::domain::entities::{Country, Region};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GeoQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GeoQuery: Send + Sync {
    async fn find_country(&self, country_id: Uuid) -> Result<Option<Country>, GeoQueryError>;

    /// Active regions of a country, ordered by name.
    async fn list_active_regions(&self, country_id: Uuid) -> Result<Vec<Region>, GeoQueryError>;
}
