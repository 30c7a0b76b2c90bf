use async_trait::async_trait;
use tracing::{error, info};

use crate::course::application::{
    domain::entities::Category,
    ports::{
        incoming::use_cases::{CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase},
        outgoing::{CatalogRepository, CreateCategoryData},
    },
};

#[derive(Debug, Clone)]
pub struct CreateCategoryService<R>
where
    R: CatalogRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCategoryService<R>
where
    R: CatalogRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CreateCategoryService<R>
where
    R: CatalogRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CreateCategoryError> {
        let data = CreateCategoryData {
            name: command.name().to_string(),
            icon: command.icon().cloned(),
        };

        self.repository
            .create_category(data)
            .await
            .map(|category| {
                info!("Category created: {}", category.name);
                category
            })
            .map_err(|e| {
                error!("Failed to create category: {}", e);
                CreateCategoryError::RepositoryError(e.to_string())
            })
    }
}
