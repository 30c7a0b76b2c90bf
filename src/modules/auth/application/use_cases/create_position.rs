use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{Position, Slug, SlugError};
use crate::auth::application::ports::outgoing::{
    CreatePositionData, PositionRepository, PositionRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreatePositionCommand {
    name: String,
    slug: Slug,
}

impl CreatePositionCommand {
    pub fn new(name: &str, slug: &str) -> Result<Self, CreatePositionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CreatePositionError::EmptyName);
        }
        if name.chars().count() > 255 {
            return Err(CreatePositionError::NameTooLong);
        }

        let slug = Slug::new(slug).map_err(CreatePositionError::InvalidSlug)?;

        Ok(Self {
            name: name.to_string(),
            slug,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreatePositionError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Invalid slug: {0}")]
    InvalidSlug(SlugError),

    #[error("Position with this slug already exists")]
    SlugTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreatePositionUseCase: Send + Sync {
    async fn execute(&self, command: CreatePositionCommand)
        -> Result<Position, CreatePositionError>;
}

#[derive(Debug, Clone)]
pub struct CreatePositionUseCase<R>
where
    R: PositionRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreatePositionUseCase<R>
where
    R: PositionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreatePositionUseCase for CreatePositionUseCase<R>
where
    R: PositionRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreatePositionCommand,
    ) -> Result<Position, CreatePositionError> {
        let slug = command.slug.clone();
        let data = CreatePositionData {
            name: command.name,
            slug: command.slug,
        };

        match self.repository.create_position(data).await {
            Ok(position) => {
                info!("Position created: {}", position.slug.as_str());
                Ok(position)
            }
            Err(PositionRepositoryError::SlugTaken) => {
                warn!("Position slug already taken: {}", slug.as_str());
                Err(CreatePositionError::SlugTaken)
            }
            Err(e) => Err(CreatePositionError::RepositoryError(e.to_string())),
        }
    }
}
