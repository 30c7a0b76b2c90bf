use async_trait::async_trait;
use uuid::Uuid;

use crate::common::application::domain::entities::ModerationStatus;
use crate::course::application::domain::entities::Course;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetCourseStatusError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetCourseStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        course_id: Uuid,
        status: ModerationStatus,
    ) -> Result<Course, SetCourseStatusError>;
}
