use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::course::application::{
    domain::entities::UserCourse,
    ports::{
        incoming::use_cases::{EnrollError, EnrollUseCase},
        outgoing::{EnrollmentRepository, EnrollmentRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct EnrollService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    repository: R,
}

impl<R> EnrollService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> EnrollUseCase for EnrollService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    async fn execute(&self, profile_id: Uuid, course_id: Uuid) -> Result<UserCourse, EnrollError> {
        match self.repository.create_user_course(profile_id, course_id).await {
            Ok(user_course) => {
                info!("Profile {} enrolled in course {}", profile_id, course_id);
                Ok(user_course)
            }
            Err(EnrollmentRepositoryError::AlreadyEnrolled) => {
                warn!(
                    "Profile {} is already enrolled in course {}",
                    profile_id, course_id
                );
                Err(EnrollError::AlreadyEnrolled)
            }
            Err(EnrollmentRepositoryError::ReferenceNotFound) => Err(EnrollError::ReferenceNotFound),
            Err(e) => {
                error!("Failed to enroll profile {}: {}", profile_id, e);
                Err(EnrollError::RepositoryError(e.to_string()))
            }
        }
    }
}
