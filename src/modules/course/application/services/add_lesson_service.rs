use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::course::application::{
    domain::entities::Lesson,
    ports::{
        incoming::use_cases::{AddLessonCommand, AddLessonError, AddLessonUseCase},
        outgoing::{CatalogRepository, CatalogRepositoryError, CreateLessonData},
    },
};

#[derive(Debug, Clone)]
pub struct AddLessonService<R>
where
    R: CatalogRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddLessonService<R>
where
    R: CatalogRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddLessonUseCase for AddLessonService<R>
where
    R: CatalogRepository + Send + Sync,
{
    async fn execute(&self, command: AddLessonCommand) -> Result<Lesson, AddLessonError> {
        let data = CreateLessonData {
            course_id: command.course_id(),
            name: command.name().to_string(),
            order: command.order(),
            moderation_status: command.status(),
        };

        match self.repository.create_lesson(data).await {
            Ok(lesson) => {
                info!(
                    "Lesson '{}' added to course {} at position {}",
                    lesson.name, lesson.course_id, lesson.order
                );
                Ok(lesson)
            }
            Err(CatalogRepositoryError::CourseNotFound) => {
                warn!("Lesson references missing course {}", command.course_id());
                Err(AddLessonError::CourseNotFound)
            }
            Err(e) => {
                error!("Failed to add lesson: {}", e);
                Err(AddLessonError::RepositoryError(e.to_string()))
            }
        }
    }
}
