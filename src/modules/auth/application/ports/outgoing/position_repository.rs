use async_trait::async_trait;

use crate::auth::application::domain::entities::{Position, Slug};

#[derive(Debug, Clone)]
pub struct CreatePositionData {
    pub name: String,
    pub slug: Slug,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PositionRepositoryError {
    #[error("Position with this slug already exists")]
    SlugTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PositionRepository: Send + Sync {
    async fn create_position(
        &self,
        data: CreatePositionData,
    ) -> Result<Position, PositionRepositoryError>;
}
