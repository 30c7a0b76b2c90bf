use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::common::application::domain::entities::ModerationStatus;
use crate::course::application::{
    domain::entities::Course,
    ports::{
        incoming::use_cases::{SetCourseStatusError, SetCourseStatusUseCase},
        outgoing::{CatalogRepository, CatalogRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct SetCourseStatusService<R>
where
    R: CatalogRepository + Send + Sync,
{
    repository: R,
}

impl<R> SetCourseStatusService<R>
where
    R: CatalogRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetCourseStatusUseCase for SetCourseStatusService<R>
where
    R: CatalogRepository + Send + Sync,
{
    async fn execute(
        &self,
        course_id: Uuid,
        status: ModerationStatus,
    ) -> Result<Course, SetCourseStatusError> {
        match self.repository.set_course_status(course_id, status).await {
            Ok(course) => {
                info!("Course {} moved to {}", course_id, status);
                Ok(course)
            }
            Err(CatalogRepositoryError::CourseNotFound) => Err(SetCourseStatusError::CourseNotFound),
            Err(e) => {
                error!("Failed to update course {} status: {}", course_id, e);
                Err(SetCourseStatusError::RepositoryError(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::StubCatalog;

    #[tokio::test]
    async fn status_is_applied() {
        let service = SetCourseStatusService::new(StubCatalog::default());

        let course = service
            .execute(Uuid::new_v4(), ModerationStatus::Inactive)
            .await
            .unwrap();

        assert_eq!(course.moderation_status, ModerationStatus::Inactive);
    }

    #[tokio::test]
    async fn missing_course() {
        let service = SetCourseStatusService::new(StubCatalog::rejecting(
            CatalogRepositoryError::CourseNotFound,
        ));

        let result = service.execute(Uuid::new_v4(), ModerationStatus::Active).await;

        assert!(matches!(result, Err(SetCourseStatusError::CourseNotFound)));
    }
}
