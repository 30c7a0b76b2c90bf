use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::course::application::ports::{
    incoming::use_cases::{DeleteCourseError, DeleteCourseUseCase},
    outgoing::{CatalogRepository, CatalogRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCourseService<R>
where
    R: CatalogRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteCourseService<R>
where
    R: CatalogRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCourseUseCase for DeleteCourseService<R>
where
    R: CatalogRepository + Send + Sync,
{
    async fn execute(&self, course_id: Uuid) -> Result<(), DeleteCourseError> {
        self.repository
            .delete_course(course_id)
            .await
            .map(|()| info!("Course {} deleted", course_id))
            .map_err(|e| match e {
                CatalogRepositoryError::CourseNotFound => DeleteCourseError::CourseNotFound,
                other => {
                    error!("Failed to delete course {}: {}", course_id, other);
                    DeleteCourseError::RepositoryError(other.to_string())
                }
            })
    }
}
