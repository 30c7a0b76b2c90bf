use async_trait::async_trait;
use uuid::Uuid;

use crate::common::application::domain::entities::ModerationStatus;
use crate::course::application::domain::entities::Lesson;

#[derive(Debug, Clone)]
pub struct AddLessonCommand {
    course_id: Uuid,
    name: String,
    order: u32,
    status: ModerationStatus,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddLessonCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Order out of range")]
    OrderOutOfRange,
}

impl AddLessonCommand {
    pub fn new(
        course_id: Uuid,
        name: String,
        order: Option<u32>,
        status: Option<ModerationStatus>,
    ) -> Result<Self, AddLessonCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(AddLessonCommandError::EmptyName);
        }
        if name.chars().count() > 255 {
            return Err(AddLessonCommandError::NameTooLong);
        }
        let order = order.unwrap_or(0);
        if i32::try_from(order).is_err() {
            return Err(AddLessonCommandError::OrderOutOfRange);
        }

        Ok(Self {
            course_id,
            name: name.to_string(),
            order,
            status: status.unwrap_or_default(),
        })
    }

    pub fn course_id(&self) -> Uuid {
        self.course_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn status(&self) -> ModerationStatus {
        self.status
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddLessonError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddLessonUseCase: Send + Sync {
    async fn execute(&self, command: AddLessonCommand) -> Result<Lesson, AddLessonError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_and_status_default() {
        let command = AddLessonCommand::new(Uuid::new_v4(), "Intro".to_string(), None, None).unwrap();
        assert_eq!(command.order(), 0);
        assert_eq!(command.status(), ModerationStatus::Active);
    }

    #[test]
    fn rejects_long_name() {
        let result = AddLessonCommand::new(Uuid::new_v4(), "x".repeat(256), Some(1), None);
        assert_eq!(result.unwrap_err(), AddLessonCommandError::NameTooLong);
    }

    #[test]
    fn rejects_order_beyond_column_range() {
        let too_big = i32::MAX as u32 + 1;
        let result = AddLessonCommand::new(Uuid::new_v4(), "Intro".to_string(), Some(too_big), None);
        assert_eq!(result.unwrap_err(), AddLessonCommandError::OrderOutOfRange);

        let command =
            AddLessonCommand::new(Uuid::new_v4(), "Intro".to_string(), Some(i32::MAX as u32), None)
                .unwrap();
        assert_eq!(command.order(), i32::MAX as u32);
    }
}
