use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::CourseCertificate;
use crate::shared::storage::StoredFileError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplaceCertificateFileError {
    #[error("Invalid certificate file: {0}")]
    InvalidFile(StoredFileError),

    #[error("Certificate not found")]
    CertificateNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReplaceCertificateFileUseCase: Send + Sync {
    async fn execute(
        &self,
        certificate_id: Uuid,
        file: &str,
    ) -> Result<CourseCertificate, ReplaceCertificateFileError>;
}
