use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::UserCourse;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrollError {
    #[error("Profile is already enrolled in this course")]
    AlreadyEnrolled,

    #[error("Profile or course not found")]
    ReferenceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EnrollUseCase: Send + Sync {
    async fn execute(&self, profile_id: Uuid, course_id: Uuid) -> Result<UserCourse, EnrollError>;
}
