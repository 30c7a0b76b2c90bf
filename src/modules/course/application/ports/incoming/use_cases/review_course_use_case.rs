use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::{CourseReview, Rating, RatingOutOfRange};

#[derive(Debug, Clone)]
pub struct ReviewCourseCommand {
    profile_id: Uuid,
    course_id: Uuid,
    comment: String,
    rating: Rating,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReviewCourseCommandError {
    #[error("Comment cannot be empty")]
    EmptyComment,

    #[error(transparent)]
    InvalidRating(#[from] RatingOutOfRange),
}

impl ReviewCourseCommand {
    pub fn new(
        profile_id: Uuid,
        course_id: Uuid,
        comment: String,
        rating: u8,
    ) -> Result<Self, ReviewCourseCommandError> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ReviewCourseCommandError::EmptyComment);
        }

        Ok(Self {
            profile_id,
            course_id,
            comment: comment.to_string(),
            rating: Rating::new(rating)?,
        })
    }

    pub fn profile_id(&self) -> Uuid {
        self.profile_id
    }

    pub fn course_id(&self) -> Uuid {
        self.course_id
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewCourseError {
    #[error("Profile already reviewed this course")]
    AlreadyReviewed,

    #[error("Profile or course not found")]
    ReferenceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReviewCourseUseCase: Send + Sync {
    async fn execute(&self, command: ReviewCourseCommand)
        -> Result<CourseReview, ReviewCourseError>;
}
