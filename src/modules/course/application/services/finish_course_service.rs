use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::course::application::{
    domain::entities::UserCourse,
    ports::{
        incoming::use_cases::{FinishCourseError, FinishCourseUseCase},
        outgoing::{EnrollmentRepository, EnrollmentRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct FinishCourseService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    repository: R,
}

impl<R> FinishCourseService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> FinishCourseUseCase for FinishCourseService<R>
where
    R: EnrollmentRepository + Send + Sync,
{
    async fn execute(&self, user_course_id: Uuid) -> Result<UserCourse, FinishCourseError> {
        self.repository
            .finish_user_course(user_course_id)
            .await
            .map(|user_course| {
                info!("User course {} finished", user_course_id);
                user_course
            })
            .map_err(|e| match e {
                EnrollmentRepositoryError::UserCourseNotFound => {
                    FinishCourseError::UserCourseNotFound
                }
                other => {
                    error!("Failed to finish user course {}: {}", user_course_id, other);
                    FinishCourseError::RepositoryError(other.to_string())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::StubEnrollments;

    #[tokio::test]
    async fn marks_enrollment_finished() {
        let repository = StubEnrollments::default();
        let enrollment = repository
            .create_user_course(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        let finished = FinishCourseService::new(repository)
            .execute(enrollment.id)
            .await
            .unwrap();

        assert!(finished.is_finished);
    }

    #[tokio::test]
    async fn unknown_enrollment() {
        let result = FinishCourseService::new(StubEnrollments::default())
            .execute(Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(FinishCourseError::UserCourseNotFound)));
    }
}
