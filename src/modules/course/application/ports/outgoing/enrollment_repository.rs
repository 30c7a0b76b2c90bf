use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::{
    CourseCertificate, CourseReview, Rating, UserCourse, VideoView,
};
use crate::shared::storage::StoredFile;

#[derive(Debug, Clone)]
pub struct CreateReviewData {
    pub course_id: Uuid,
    pub profile_id: Uuid,
    pub comment: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrollmentRepositoryError {
    #[error("Profile is already enrolled in this course")]
    AlreadyEnrolled,

    #[error("Video already viewed by this profile")]
    AlreadyViewed,

    #[error("Profile already reviewed this course")]
    AlreadyReviewed,

    #[error("Certificate already issued for this user course")]
    CertificateAlreadyIssued,

    #[error("User course is not finished yet")]
    CourseNotFinished,

    #[error("User course not found")]
    UserCourseNotFound,

    #[error("Certificate not found")]
    CertificateNotFound,

    /// Profile, course or video lesson the row points at does not exist.
    #[error("Referenced record not found")]
    ReferenceNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn create_user_course(
        &self,
        profile_id: Uuid,
        course_id: Uuid,
    ) -> Result<UserCourse, EnrollmentRepositoryError>;

    async fn finish_user_course(
        &self,
        user_course_id: Uuid,
    ) -> Result<UserCourse, EnrollmentRepositoryError>;

    async fn create_video_view(
        &self,
        profile_id: Uuid,
        video_lesson_id: Uuid,
    ) -> Result<VideoView, EnrollmentRepositoryError>;

    /// Inserts the certificate only when the enrollment is finished.
    async fn create_certificate(
        &self,
        user_course_id: Uuid,
        certificate: StoredFile,
    ) -> Result<CourseCertificate, EnrollmentRepositoryError>;

    /// Swaps the stored file of an existing certificate. No completion check.
    async fn replace_certificate_file(
        &self,
        certificate_id: Uuid,
        certificate: StoredFile,
    ) -> Result<CourseCertificate, EnrollmentRepositoryError>;

    async fn create_review(
        &self,
        data: CreateReviewData,
    ) -> Result<CourseReview, EnrollmentRepositoryError>;
}
