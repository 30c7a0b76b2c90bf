use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::VideoLesson;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListLessonVideosError {
    #[error("Lesson not found")]
    LessonNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListLessonVideosUseCase: Send + Sync {
    async fn execute(&self, lesson_id: Uuid) -> Result<Vec<VideoLesson>, ListLessonVideosError>;
}
