use async_trait::async_trait;
use uuid::Uuid;

use crate::common::application::domain::entities::Region;

#[derive(Debug, Clone)]
pub struct CreateRegionCommand {
    country_id: Uuid,
    name: String,
    soato: String,
    is_active: bool,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CreateRegionCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Soato cannot be empty")]
    EmptySoato,

    #[error("Soato too long")]
    SoatoTooLong,
}

impl CreateRegionCommand {
    pub fn new(
        country_id: Uuid,
        name: String,
        soato: String,
        is_active: Option<bool>,
    ) -> Result<Self, CreateRegionCommandError> {
        let name = name.trim();
        let soato = soato.trim();

        if name.is_empty() {
            return Err(CreateRegionCommandError::EmptyName);
        }
        if name.chars().count() > 255 {
            return Err(CreateRegionCommandError::NameTooLong);
        }
        if soato.is_empty() {
            return Err(CreateRegionCommandError::EmptySoato);
        }
        if soato.chars().count() > 255 {
            return Err(CreateRegionCommandError::SoatoTooLong);
        }

        Ok(Self {
            country_id,
            name: name.to_string(),
            soato: soato.to_string(),
            is_active: is_active.unwrap_or(true),
        })
    }

    pub fn country_id(&self) -> Uuid {
        self.country_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn soato(&self) -> &str {
        &self.soato
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateRegionError {
    #[error("Country not found")]
    CountryNotFound,

    #[error("Region with this soato already exists")]
    SoatoTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateRegionUseCase: Send + Sync {
    async fn execute(&self, command: CreateRegionCommand) -> Result<Region, CreateRegionError>;
}
