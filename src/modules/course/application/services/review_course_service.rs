use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::course::application::{
    domain::entities::CourseReview,
    ports::{
        incoming::use_cases::{ReviewCourseCommand, ReviewCourseError, ReviewCourseUseCase},
        outgoing::{CreateReviewData, EnrollmentRepository, EnrollmentRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct ReviewCourseService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    repository: R,
}

impl<R> ReviewCourseService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReviewCourseUseCase for ReviewCourseService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: ReviewCourseCommand,
    ) -> Result<CourseReview, ReviewCourseError> {
        let data = CreateReviewData {
            course_id: command.course_id(),
            profile_id: command.profile_id(),
            comment: command.comment().to_string(),
            rating: command.rating(),
        };

        match self.repository.create_review(data).await {
            Ok(review) => {
                info!(
                    "Profile {} rated course {} with {}",
                    review.profile_id, review.course_id, review.rating
                );
                Ok(review)
            }
            Err(EnrollmentRepositoryError::AlreadyReviewed) => {
                warn!(
                    "Profile {} already reviewed course {}",
                    command.profile_id(),
                    command.course_id()
                );
                Err(ReviewCourseError::AlreadyReviewed)
            }
            Err(EnrollmentRepositoryError::ReferenceNotFound) => {
                Err(ReviewCourseError::ReferenceNotFound)
            }
            Err(e) => {
                error!("Failed to store review: {}", e);
                Err(ReviewCourseError::RepositoryError(e.to_string()))
            }
        }
    }
}
