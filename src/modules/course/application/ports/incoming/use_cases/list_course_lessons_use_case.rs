use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::Lesson;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCourseLessonsError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListCourseLessonsUseCase: Send + Sync {
    async fn execute(&self, course_id: Uuid) -> Result<Vec<Lesson>, ListCourseLessonsError>;
}
