use async_trait::async_trait;

use crate::course::application::domain::entities::Category;
use crate::shared::storage::{StoredFile, StoredFileError, UploadLocation};

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    name: String,
    icon: Option<StoredFile>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CreateCategoryCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Invalid icon: {0}")]
    InvalidIcon(StoredFileError),
}

impl CreateCategoryCommand {
    pub fn new(name: String, icon: Option<&str>) -> Result<Self, CreateCategoryCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateCategoryCommandError::EmptyName);
        }
        if name.chars().count() > 255 {
            return Err(CreateCategoryCommandError::NameTooLong);
        }

        let icon = icon
            .map(|path| StoredFile::new(UploadLocation::CategoryIcons, path))
            .transpose()
            .map_err(CreateCategoryCommandError::InvalidIcon)?;

        Ok(Self {
            name: name.to_string(),
            icon,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> Option<&StoredFile> {
        self.icon.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, command: CreateCategoryCommand)
        -> Result<Category, CreateCategoryError>;
}
