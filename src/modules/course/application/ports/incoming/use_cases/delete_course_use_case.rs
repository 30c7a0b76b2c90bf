use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCourseError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCourseUseCase: Send + Sync {
    async fn execute(&self, course_id: Uuid) -> Result<(), DeleteCourseError>;
}
