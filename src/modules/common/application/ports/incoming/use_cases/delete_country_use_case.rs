use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCountryError {
    #[error("Country not found")]
    CountryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCountryUseCase: Send + Sync {
    async fn execute(&self, country_id: Uuid) -> Result<(), DeleteCountryError>;
}
