use async_trait::async_trait;
use uuid::Uuid;

use crate::common::application::domain::entities::ModerationStatus;
use crate::course::application::domain::entities::{Category, Course, Lesson, VideoLesson};
use crate::shared::storage::StoredFile;

#[derive(Debug, Clone)]
pub struct CreateCategoryData {
    pub name: String,
    pub icon: Option<StoredFile>,
}

#[derive(Debug, Clone)]
pub struct CreateCourseData {
    pub category_id: Uuid,
    pub name: String,
    pub main_image: StoredFile,
    pub about: Option<String>,
    pub price: u32,
    pub moderation_status: ModerationStatus,
}

#[derive(Debug, Clone)]
pub struct CreateLessonData {
    pub course_id: Uuid,
    pub name: String,
    pub order: u32,
    pub moderation_status: ModerationStatus,
}

#[derive(Debug, Clone)]
pub struct CreateVideoLessonData {
    pub lesson_id: Uuid,
    pub name: String,
    pub video: StoredFile,
    pub order: u32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogRepositoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Lesson not found")]
    LessonNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CatalogRepositoryError>;

    async fn create_course(&self, data: CreateCourseData) -> Result<Course, CatalogRepositoryError>;

    async fn set_course_status(
        &self,
        course_id: Uuid,
        status: ModerationStatus,
    ) -> Result<Course, CatalogRepositoryError>;

    /// Removes the course with its lessons, videos, enrollments and reviews.
    async fn delete_course(&self, course_id: Uuid) -> Result<(), CatalogRepositoryError>;

    async fn create_lesson(&self, data: CreateLessonData) -> Result<Lesson, CatalogRepositoryError>;

    async fn create_video_lesson(
        &self,
        data: CreateVideoLessonData,
    ) -> Result<VideoLesson, CatalogRepositoryError>;
}
