use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::course::application::{
    domain::entities::CourseCertificate,
    ports::{
        incoming::use_cases::{IssueCertificateError, IssueCertificateUseCase},
        outgoing::{EnrollmentRepository, EnrollmentRepositoryError},
    },
};
use crate::shared::storage::{StoredFile, UploadLocation};

#[derive(Debug, Clone)]
pub struct IssueCertificateService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    repository: R,
}

impl<R> IssueCertificateService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IssueCertificateUseCase for IssueCertificateService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_course_id: Uuid,
        file: &str,
    ) -> Result<CourseCertificate, IssueCertificateError> {
        let certificate = StoredFile::new(UploadLocation::Certificates, file)
            .map_err(IssueCertificateError::InvalidFile)?;

        match self
            .repository
            .create_certificate(user_course_id, certificate)
            .await
        {
            Ok(certificate) => {
                info!("Certificate issued for user course {}", user_course_id);
                Ok(certificate)
            }
            Err(EnrollmentRepositoryError::CourseNotFinished) => {
                warn!(
                    "Refusing certificate for unfinished user course {}",
                    user_course_id
                );
                Err(IssueCertificateError::CourseNotFinished)
            }
            Err(EnrollmentRepositoryError::CertificateAlreadyIssued) => {
                warn!("User course {} already has a certificate", user_course_id);
                Err(IssueCertificateError::CertificateAlreadyIssued)
            }
            Err(EnrollmentRepositoryError::UserCourseNotFound) => {
                Err(IssueCertificateError::UserCourseNotFound)
            }
            Err(e) => {
                error!("Failed to issue certificate: {}", e);
                Err(IssueCertificateError::RepositoryError(e.to_string()))
            }
        }
    }
}
