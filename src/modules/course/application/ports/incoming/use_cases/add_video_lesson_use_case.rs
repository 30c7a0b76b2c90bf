use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::VideoLesson;
use crate::shared::storage::{StoredFile, StoredFileError, UploadLocation};

#[derive(Debug, Clone)]
pub struct AddVideoLessonCommand {
    lesson_id: Uuid,
    name: String,
    video: StoredFile,
    order: u32,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddVideoLessonCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Invalid video: {0}")]
    InvalidVideo(StoredFileError),

    #[error("Order out of range")]
    OrderOutOfRange,
}

impl AddVideoLessonCommand {
    pub fn new(
        lesson_id: Uuid,
        name: String,
        video: &str,
        order: Option<u32>,
    ) -> Result<Self, AddVideoLessonCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(AddVideoLessonCommandError::EmptyName);
        }
        if name.chars().count() > 255 {
            return Err(AddVideoLessonCommandError::NameTooLong);
        }
        let order = order.unwrap_or(0);
        if i32::try_from(order).is_err() {
            return Err(AddVideoLessonCommandError::OrderOutOfRange);
        }

        let video = StoredFile::new(UploadLocation::Videos, video)
            .map_err(AddVideoLessonCommandError::InvalidVideo)?;

        Ok(Self {
            lesson_id,
            name: name.to_string(),
            video,
            order,
        })
    }

    pub fn lesson_id(&self) -> Uuid {
        self.lesson_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn video(&self) -> &StoredFile {
        &self.video
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddVideoLessonError {
    #[error("Lesson not found")]
    LessonNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddVideoLessonUseCase: Send + Sync {
    async fn execute(
        &self,
        command: AddVideoLessonCommand,
    ) -> Result<VideoLesson, AddVideoLessonError>;
}
