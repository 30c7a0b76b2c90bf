use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

use crate::course::application::{
    domain::entities::VideoLesson,
    ports::{
        incoming::use_cases::{ListLessonVideosError, ListLessonVideosUseCase},
        outgoing::{CatalogQuery, CatalogQueryError},
    },
};

#[derive(Debug, Clone)]
pub struct ListLessonVideosService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListLessonVideosService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListLessonVideosUseCase for ListLessonVideosService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    async fn execute(&self, lesson_id: Uuid) -> Result<Vec<VideoLesson>, ListLessonVideosError> {
        let to_query_error = |e: CatalogQueryError| {
            error!("Failed to list videos of lesson {}: {}", lesson_id, e);
            ListLessonVideosError::QueryError(e.to_string())
        };

        self.query
            .find_lesson(lesson_id)
            .await
            .map_err(to_query_error)?
            .ok_or(ListLessonVideosError::LessonNotFound)?;

        self.query
            .list_lesson_videos(lesson_id)
            .await
            .map_err(to_query_error)
    }
}
