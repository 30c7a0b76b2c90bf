use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::{Course, Lesson, VideoLesson};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CatalogQuery: Send + Sync {
    async fn find_course(&self, course_id: Uuid) -> Result<Option<Course>, CatalogQueryError>;

    async fn find_lesson(&self, lesson_id: Uuid) -> Result<Option<Lesson>, CatalogQueryError>;

    /// Lessons ordered by `order`, then creation time, then id.
    async fn list_course_lessons(&self, course_id: Uuid) -> Result<Vec<Lesson>, CatalogQueryError>;

    /// Videos ordered the same way as lessons.
    async fn list_lesson_videos(
        &self,
        lesson_id: Uuid,
    ) -> Result<Vec<VideoLesson>, CatalogQueryError>;
}
