use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::course::application::{
    domain::entities::{Course, Lesson, VideoLesson},
    ports::outgoing::{CatalogQuery, CatalogQueryError},
};

use super::sea_orm_entity::{courses, lessons, video_lessons};

#[derive(Debug, Clone)]
pub struct CatalogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CatalogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogQuery for CatalogQueryPostgres {
    async fn find_course(&self, course_id: Uuid) -> Result<Option<Course>, CatalogQueryError> {
        let model = courses::Entity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(|e| CatalogQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(courses::Model::to_domain))
    }

    async fn find_lesson(&self, lesson_id: Uuid) -> Result<Option<Lesson>, CatalogQueryError> {
        let model = lessons::Entity::find_by_id(lesson_id)
            .one(&*self.db)
            .await
            .map_err(|e| CatalogQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(lessons::Model::to_domain))
    }

    async fn list_course_lessons(&self, course_id: Uuid) -> Result<Vec<Lesson>, CatalogQueryError> {
        let models = lessons::Entity::find()
            .filter(lessons::Column::CourseId.eq(course_id))
            .order_by_asc(lessons::Column::Order)
            .order_by_asc(lessons::Column::CreatedAt)
            .order_by_asc(lessons::Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| CatalogQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(lessons::Model::to_domain).collect())
    }

    async fn list_lesson_videos(
        &self,
        lesson_id: Uuid,
    ) -> Result<Vec<VideoLesson>, CatalogQueryError> {
        let models = video_lessons::Entity::find()
            .filter(video_lessons::Column::LessonId.eq(lesson_id))
            .order_by_asc(video_lessons::Column::Order)
            .order_by_asc(video_lessons::Column::CreatedAt)
            .order_by_asc(video_lessons::Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| CatalogQueryError::DatabaseError(e.to_string()))?;

        Ok(models
            .into_iter()
            .map(video_lessons::Model::to_domain)
            .collect())
    }
}
