use async_trait::async_trait;
use uuid::Uuid;

use crate::common::application::domain::entities::ModerationStatus;
use crate::course::application::domain::entities::Course;
use crate::shared::storage::{StoredFile, StoredFileError, UploadLocation};

#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    category_id: Uuid,
    name: String,
    main_image: StoredFile,
    about: Option<String>,
    price: u32,
    status: ModerationStatus,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CreateCourseCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Invalid main image: {0}")]
    InvalidMainImage(StoredFileError),

    #[error("Price out of range")]
    PriceOutOfRange,
}

impl CreateCourseCommand {
    pub fn new(
        category_id: Uuid,
        name: String,
        main_image: &str,
        about: Option<String>,
        price: u32,
        status: Option<ModerationStatus>,
    ) -> Result<Self, CreateCourseCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateCourseCommandError::EmptyName);
        }
        if name.chars().count() > 255 {
            return Err(CreateCourseCommandError::NameTooLong);
        }
        // stored in a signed integer column
        if i32::try_from(price).is_err() {
            return Err(CreateCourseCommandError::PriceOutOfRange);
        }

        let main_image = StoredFile::new(UploadLocation::Courses, main_image)
            .map_err(CreateCourseCommandError::InvalidMainImage)?;

        Ok(Self {
            category_id,
            name: name.to_string(),
            main_image,
            about: about.filter(|text| !text.trim().is_empty()),
            price,
            status: status.unwrap_or_default(),
        })
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn main_image(&self) -> &StoredFile {
        &self.main_image
    }

    pub fn about(&self) -> Option<&str> {
        self.about.as_deref()
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn status(&self) -> ModerationStatus {
        self.status
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCourseError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCourseUseCase: Send + Sync {
    async fn execute(&self, command: CreateCourseCommand) -> Result<Course, CreateCourseError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_active_status() {
        let command = CreateCourseCommand::new(
            Uuid::new_v4(),
            "Rust basics".to_string(),
            "rust.png",
            Some("<p>Ownership</p>".to_string()),
            120_000,
            None,
        )
        .unwrap();

        assert_eq!(command.status(), ModerationStatus::Active);
        assert_eq!(command.main_image().as_str(), "courses/rust.png");
        assert_eq!(command.about(), Some("<p>Ownership</p>"));
    }

    #[test]
    fn blank_about_is_dropped() {
        let command = CreateCourseCommand::new(
            Uuid::new_v4(),
            "Rust basics".to_string(),
            "courses/rust.png",
            Some("   ".to_string()),
            0,
            Some(ModerationStatus::InModeration),
        )
        .unwrap();

        assert_eq!(command.about(), None);
        assert_eq!(command.status(), ModerationStatus::InModeration);
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(
            CreateCourseCommand::new(Uuid::new_v4(), " ".to_string(), "rust.png", None, 0, None)
                .unwrap_err(),
            CreateCourseCommandError::EmptyName
        );
        assert_eq!(
            CreateCourseCommand::new(
                Uuid::new_v4(),
                "Rust".to_string(),
                "../rust.png",
                None,
                0,
                None
            )
            .unwrap_err(),
            CreateCourseCommandError::InvalidMainImage(StoredFileError::UnsafePath)
        );
        assert_eq!(
            CreateCourseCommand::new(
                Uuid::new_v4(),
                "Rust".to_string(),
                "rust.png",
                None,
                u32::MAX,
                None
            )
            .unwrap_err(),
            CreateCourseCommandError::PriceOutOfRange
        );
    }
}
