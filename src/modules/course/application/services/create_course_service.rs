use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::course::application::{
    domain::entities::Course,
    ports::{
        incoming::use_cases::{CreateCourseCommand, CreateCourseError, CreateCourseUseCase},
        outgoing::{CatalogRepository, CatalogRepositoryError, CreateCourseData},
    },
};

#[derive(Debug, Clone)]
pub struct CreateCourseService<R>
where
    R: CatalogRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCourseService<R>
where
    R: CatalogRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCourseUseCase for CreateCourseService<R>
where
    R: CatalogRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCourseCommand) -> Result<Course, CreateCourseError> {
        let data = CreateCourseData {
            category_id: command.category_id(),
            name: command.name().to_string(),
            main_image: command.main_image().clone(),
            about: command.about().map(str::to_string),
            price: command.price(),
            moderation_status: command.status(),
        };

        match self.repository.create_course(data).await {
            Ok(course) => {
                info!("Course created: {} ({})", course.name, course.id);
                Ok(course)
            }
            Err(CatalogRepositoryError::CategoryNotFound) => {
                warn!("Course references missing category {}", command.category_id());
                Err(CreateCourseError::CategoryNotFound)
            }
            Err(e) => {
                error!("Failed to create course: {}", e);
                Err(CreateCourseError::RepositoryError(e.to_string()))
            }
        }
    }
}
