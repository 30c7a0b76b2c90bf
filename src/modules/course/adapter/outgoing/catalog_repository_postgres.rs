use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::common::adapter::outgoing::sea_orm_entity::moderation_status::ModerationStatusColumn;
use crate::common::application::domain::entities::ModerationStatus;
use crate::course::application::{
    domain::entities::{Category, Course, Lesson, VideoLesson},
    ports::outgoing::{
        CatalogRepository, CatalogRepositoryError, CreateCategoryData, CreateCourseData,
        CreateLessonData, CreateVideoLessonData,
    },
};
use crate::shared::db_error::is_foreign_key_violation;
use crate::shared::storage::StoredFile;

use super::sea_orm_entity::{categories, courses, lessons, video_lessons};

#[derive(Debug, Clone)]
pub struct CatalogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CatalogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CatalogRepositoryError {
        error!("Catalog write failed: {}", e);
        CatalogRepositoryError::DatabaseError(e.to_string())
    }

    fn order_column(order: u32) -> Result<i32, CatalogRepositoryError> {
        i32::try_from(order)
            .map_err(|_| CatalogRepositoryError::DatabaseError("order out of range".to_string()))
    }

    /// A dangling parent key on insert becomes `missing`.
    fn map_insert_err(e: DbErr, missing: CatalogRepositoryError) -> CatalogRepositoryError {
        if is_foreign_key_violation(&e) {
            return missing;
        }
        Self::map_db_err(e)
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CatalogRepositoryError> {
        let model = categories::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            icon: Set(data.icon.map(StoredFile::into_inner)),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        Ok(model.to_domain())
    }

    async fn create_course(&self, data: CreateCourseData) -> Result<Course, CatalogRepositoryError> {
        let price = i32::try_from(data.price)
            .map_err(|_| CatalogRepositoryError::DatabaseError("price out of range".to_string()))?;

        let model = courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            category_id: Set(data.category_id),
            main_image: Set(data.main_image.into_inner()),
            about: Set(data.about),
            price: Set(price),
            moderation_status: Set(data.moderation_status.into()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| Self::map_insert_err(e, CatalogRepositoryError::CategoryNotFound))?;

        Ok(model.to_domain())
    }

    async fn set_course_status(
        &self,
        course_id: Uuid,
        status: ModerationStatus,
    ) -> Result<Course, CatalogRepositoryError> {
        let mut active = courses::Entity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(CatalogRepositoryError::CourseNotFound)?
            .into_active_model();

        active.moderation_status = Set(ModerationStatusColumn::from(status));

        let model = active.update(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(model.to_domain())
    }

    async fn delete_course(&self, course_id: Uuid) -> Result<(), CatalogRepositoryError> {
        let result = courses::Entity::delete_by_id(course_id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CatalogRepositoryError::CourseNotFound);
        }
        Ok(())
    }

    async fn create_lesson(&self, data: CreateLessonData) -> Result<Lesson, CatalogRepositoryError> {
        let order = Self::order_column(data.order)?;

        let model = lessons::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            course_id: Set(data.course_id),
            order: Set(order),
            moderation_status: Set(data.moderation_status.into()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| Self::map_insert_err(e, CatalogRepositoryError::CourseNotFound))?;

        Ok(model.to_domain())
    }

    async fn create_video_lesson(
        &self,
        data: CreateVideoLessonData,
    ) -> Result<VideoLesson, CatalogRepositoryError> {
        let order = Self::order_column(data.order)?;

        let model = video_lessons::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            lesson_id: Set(data.lesson_id),
            video: Set(data.video.into_inner()),
            order: Set(order),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| Self::map_insert_err(e, CatalogRepositoryError::LessonNotFound))?;

        Ok(model.to_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::UploadLocation;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn course_model(id: Uuid, status: ModerationStatusColumn) -> courses::Model {
        let now = Utc::now().fixed_offset();
        courses::Model {
            id,
            name: "Rust basics".to_string(),
            category_id: Uuid::new_v4(),
            main_image: "courses/rust.png".to_string(),
            about: None,
            price: 120_000,
            moderation_status: status,
            created_at: now,
            updated_at: now,
        }
    }

    fn course_data() -> CreateCourseData {
        CreateCourseData {
            category_id: Uuid::new_v4(),
            name: "Rust basics".to_string(),
            main_image: StoredFile::new(UploadLocation::Courses, "rust.png").unwrap(),
            about: None,
            price: 120_000,
            moderation_status: ModerationStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_create_course_success() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(id, ModerationStatusColumn::Active)]])
            .into_connection();

        let repo = CatalogRepositoryPostgres::new(Arc::new(db));

        let course = repo.create_course(course_data()).await.unwrap();

        assert_eq!(course.id, id);
        assert_eq!(course.price, 120_000);
        assert_eq!(course.main_image.as_str(), "courses/rust.png");
    }

    #[tokio::test]
    async fn test_create_course_unknown_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "insert or update on table \"courses\" violates foreign key constraint".to_string(),
            )])
            .into_connection();

        let repo = CatalogRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.create_course(course_data()).await,
            Err(CatalogRepositoryError::CategoryNotFound)
        ));
    }

    #[tokio::test]
    async fn test_set_course_status() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(id, ModerationStatusColumn::Active)]])
            .append_query_results(vec![vec![course_model(id, ModerationStatusColumn::Inactive)]])
            .into_connection();

        let repo = CatalogRepositoryPostgres::new(Arc::new(db));

        let course = repo
            .set_course_status(id, ModerationStatus::Inactive)
            .await
            .unwrap();

        assert_eq!(course.moderation_status, ModerationStatus::Inactive);
    }

    #[tokio::test]
    async fn test_delete_course_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = CatalogRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.delete_course(Uuid::new_v4()).await,
            Err(CatalogRepositoryError::CourseNotFound)
        ));
    }

    #[tokio::test]
    async fn test_create_video_lesson_unknown_lesson() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "violates foreign key constraint \"fk_video_lessons_lesson_id\"".to_string(),
            )])
            .into_connection();

        let repo = CatalogRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_video_lesson(CreateVideoLessonData {
                lesson_id: Uuid::new_v4(),
                name: "Traits".to_string(),
                video: StoredFile::new(UploadLocation::Videos, "traits.mp4").unwrap(),
                order: 0,
            })
            .await;

        assert!(matches!(result, Err(CatalogRepositoryError::LessonNotFound)));
    }
}
