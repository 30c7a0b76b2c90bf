use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::CourseCertificate;
use crate::shared::storage::StoredFileError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IssueCertificateError {
    #[error("Invalid certificate file: {0}")]
    InvalidFile(StoredFileError),

    #[error("User course not found")]
    UserCourseNotFound,

    #[error("User course is not finished yet")]
    CourseNotFinished,

    #[error("Certificate already issued for this user course")]
    CertificateAlreadyIssued,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IssueCertificateUseCase: Send + Sync {
    /// `file` is a name or path under `certificates`.
    async fn execute(
        &self,
        user_course_id: Uuid,
        file: &str,
    ) -> Result<CourseCertificate, IssueCertificateError>;
}
