use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::course::application::{
    domain::entities::VideoLesson,
    ports::{
        incoming::use_cases::{AddVideoLessonCommand, AddVideoLessonError, AddVideoLessonUseCase},
        outgoing::{CatalogRepository, CatalogRepositoryError, CreateVideoLessonData},
    },
};

#[derive(Debug, Clone)]
pub struct AddVideoLessonService<R>
where
    R: CatalogRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddVideoLessonService<R>
where
    R: CatalogRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddVideoLessonUseCase for AddVideoLessonService<R>
where
    R: CatalogRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AddVideoLessonCommand,
    ) -> Result<VideoLesson, AddVideoLessonError> {
        let data = CreateVideoLessonData {
            lesson_id: command.lesson_id(),
            name: command.name().to_string(),
            video: command.video().clone(),
            order: command.order(),
        };

        match self.repository.create_video_lesson(data).await {
            Ok(video) => {
                info!("Video '{}' added to lesson {}", video.name, video.lesson_id);
                Ok(video)
            }
            Err(CatalogRepositoryError::LessonNotFound) => {
                warn!("Video references missing lesson {}", command.lesson_id());
                Err(AddVideoLessonError::LessonNotFound)
            }
            Err(e) => {
                error!("Failed to add video lesson: {}", e);
                Err(AddVideoLessonError::RepositoryError(e.to_string()))
            }
        }
    }
}
