use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::UserCourse;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FinishCourseError {
    #[error("User course not found")]
    UserCourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait FinishCourseUseCase: Send + Sync {
    async fn execute(&self, user_course_id: Uuid) -> Result<UserCourse, FinishCourseError>;
}
