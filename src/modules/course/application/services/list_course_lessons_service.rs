use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

use crate::course::application::{
    domain::entities::Lesson,
    ports::{
        incoming::use_cases::{ListCourseLessonsError, ListCourseLessonsUseCase},
        outgoing::{CatalogQuery, CatalogQueryError},
    },
};

#[derive(Debug, Clone)]
pub struct ListCourseLessonsService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCourseLessonsService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCourseLessonsUseCase for ListCourseLessonsService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    async fn execute(&self, course_id: Uuid) -> Result<Vec<Lesson>, ListCourseLessonsError> {
        let to_query_error = |e: CatalogQueryError| {
            error!("Failed to list lessons of course {}: {}", course_id, e);
            ListCourseLessonsError::QueryError(e.to_string())
        };

        if self
            .query
            .find_course(course_id)
            .await
            .map_err(to_query_error)?
            .is_none()
        {
            return Err(ListCourseLessonsError::CourseNotFound);
        }

        self.query
            .list_course_lessons(course_id)
            .await
            .map_err(to_query_error)
    }
}
