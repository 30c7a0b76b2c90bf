use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::course::application::{
    domain::entities::CourseCertificate,
    ports::{
        incoming::use_cases::{ReplaceCertificateFileError, ReplaceCertificateFileUseCase},
        outgoing::{EnrollmentRepository, EnrollmentRepositoryError},
    },
};
use crate::shared::storage::{StoredFile, UploadLocation};

#[derive(Debug, Clone)]
pub struct ReplaceCertificateFileService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    repository: R,
}

impl<R> ReplaceCertificateFileService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReplaceCertificateFileUseCase for ReplaceCertificateFileService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        certificate_id: Uuid,
        file: &str,
    ) -> Result<CourseCertificate, ReplaceCertificateFileError> {
        let file = StoredFile::new(UploadLocation::Certificates, file)
            .map_err(ReplaceCertificateFileError::InvalidFile)?;

        self.repository
            .replace_certificate_file(certificate_id, file)
            .await
            .map(|certificate| {
                info!("Certificate {} file replaced", certificate_id);
                certificate
            })
            .map_err(|e| match e {
                EnrollmentRepositoryError::CertificateNotFound => {
                    ReplaceCertificateFileError::CertificateNotFound
                }
                other => {
                    error!("Failed to replace certificate {}: {}", certificate_id, other);
                    ReplaceCertificateFileError::RepositoryError(other.to_string())
                }
            })
    }
}
